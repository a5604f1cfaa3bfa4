use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::error::ClientError;
use super::http::{HealthStatus, HttpEndpoint};
use super::traits::ProcessorApi;
use crate::config::ServiceConfig;
use crate::domain::{AccountId, Transaction};

/// Outcome of one queued transaction in a batch processing run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    pub transaction_id: String,
    pub status: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct BatchResponse {
    #[serde(default)]
    results: Vec<BatchResult>,
}

/// HTTP client for the transaction-processor service
#[derive(Debug, Clone)]
pub struct ProcessorClient {
    endpoint: HttpEndpoint,
}

impl ProcessorClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), &config.processor_base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            endpoint: HttpEndpoint::new(client, base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        self.endpoint.base_url()
    }
}

#[async_trait]
impl ProcessorApi for ProcessorClient {
    async fn process(&self, transaction: &Transaction) -> Result<(), ClientError> {
        self.endpoint.post_ack(&["process"], transaction).await?;
        debug!(transaction_id = %transaction.id, "Processor acknowledged transaction");
        Ok(())
    }

    async fn analytics(&self) -> Result<Value, ClientError> {
        self.endpoint.get(&["analytics"]).await
    }

    async fn analytics_for_account(&self, account_id: &AccountId) -> Result<Value, ClientError> {
        self.endpoint
            .get_with_query(&["analytics"], &[("account_id", account_id.as_str())])
            .await
    }

    async fn process_batch(&self) -> Result<Vec<BatchResult>, ClientError> {
        let response: BatchResponse = self.endpoint.post_empty(&["process", "batch"]).await?;
        debug!(count = response.results.len(), "Batch processing finished");
        Ok(response.results)
    }

    async fn health(&self) -> Result<String, ClientError> {
        let health: HealthStatus = self.endpoint.get(&["health"]).await?;
        Ok(health.status)
    }
}
