#![allow(dead_code)]

use serde_json::Value;
use teller::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A mocked ledger and processor pair
pub struct Services {
    pub ledger: MockServer,
    pub processor: MockServer,
}

impl Services {
    pub async fn start() -> Self {
        Self {
            ledger: MockServer::start().await,
            processor: MockServer::start().await,
        }
    }

    pub fn config(&self) -> ServiceConfig {
        ServiceConfig::new(self.ledger.uri(), self.processor.uri())
    }

    pub fn orchestrator(&self) -> SubmissionOrchestrator<LedgerClient, ProcessorClient> {
        let config = self.config();
        SubmissionOrchestrator::new(
            LedgerClient::new(&config).expect("valid ledger URL"),
            ProcessorClient::new(&config).expect("valid processor URL"),
        )
    }

    /// Number of requests each server has seen
    pub async fn request_counts(&self) -> (usize, usize) {
        (
            received(&self.ledger).await,
            received(&self.processor).await,
        )
    }
}

async fn received(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or_default()
}

/// Answer `verb route` with a JSON body
pub async fn respond_json(server: &MockServer, verb: &str, route: &str, status: u16, body: Value) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Answer `verb route` with a plain-text body
pub async fn respond_text(server: &MockServer, verb: &str, route: &str, status: u16, body: &str) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// Render the dashboard CSV into a string
pub async fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut output = Vec::new();
    write_dashboard(dashboard, &mut output)
        .await
        .expect("Failed to write dashboard");
    String::from_utf8(output).expect("Invalid UTF-8 in output")
}
