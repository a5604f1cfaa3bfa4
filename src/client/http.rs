use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use super::error::ClientError;

/// Body of a `GET /health` response
#[derive(Debug, Deserialize)]
pub(crate) struct HealthStatus {
    pub status: String,
}

/// FastAPI-style error body (`{"detail": "..."}`)
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    detail: String,
}

/// One service base location plus the shared HTTP client
///
/// Classifies every failure into transport, status, or decode errors so both
/// service clients report failures the same way.
#[derive(Debug, Clone)]
pub(crate) struct HttpEndpoint {
    client: Client,
    base: Url,
}

impl HttpEndpoint {
    pub(crate) fn new(client: Client, base_url: &str) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let base = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(invalid("expected an http or https URL".to_string()));
        }

        Ok(Self { client, base })
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base
    }

    /// Base URL with the given path segments appended (each segment is escaped)
    pub(crate) fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // Cannot fail: `new` rejects cannot-be-a-base URLs
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub(crate) async fn get<R: DeserializeOwned>(&self, segments: &[&str]) -> Result<R, ClientError> {
        let url = self.url(segments);
        debug!(method = "GET", %url, "Sending request");
        let response = self.send(self.client.get(url)).await?;
        decode(response).await
    }

    /// GET a JSON array; a `null` body is treated as an empty list
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<Vec<T>, ClientError> {
        let items: Option<Vec<T>> = self.get(segments).await?;
        Ok(items.unwrap_or_default())
    }

    pub(crate) async fn get_with_query<R, Q>(&self, segments: &[&str], query: &Q) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(segments);
        debug!(method = "GET", %url, "Sending request");
        let response = self.send(self.client.get(url).query(query)).await?;
        decode(response).await
    }

    pub(crate) async fn post<B, R>(&self, segments: &[&str], body: &B) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(segments);
        debug!(method = "POST", %url, "Sending request");
        let response = self.send(self.client.post(url).json(body)).await?;
        decode(response).await
    }

    /// POST where any 2xx status is the whole answer; the body is ignored
    pub(crate) async fn post_ack<B>(&self, segments: &[&str], body: &B) -> Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(segments);
        debug!(method = "POST", %url, "Sending request");
        self.send(self.client.post(url).json(body)).await?;
        Ok(())
    }

    pub(crate) async fn post_empty<R: DeserializeOwned>(&self, segments: &[&str]) -> Result<R, ClientError> {
        let url = self.url(segments);
        debug!(method = "POST", %url, "Sending request");
        let response = self.send(self.client.post(url)).await?;
        decode(response).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await.inspect_err(|e| {
            warn!(error = %e, "Request failed before a response arrived");
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(status, &body);
        warn!(status = status.as_u16(), %message, "Service returned an error status");
        Err(ClientError::Service {
            status: status.as_u16(),
            message,
        })
    }
}

async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, ClientError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| {
        warn!(error = %e, "Response body did not match the expected shape");
        ClientError::Decode(e.to_string())
    })
}

/// Error text from a failed response: the body, or the canonical reason when empty
fn error_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("Unknown status")
            .to_string();
    }
    match serde_json::from_str::<ErrorDetail>(body) {
        Ok(detail) => detail.detail,
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(base: &str) -> HttpEndpoint {
        HttpEndpoint::new(Client::new(), base).unwrap()
    }

    #[test]
    fn joins_segments_onto_bare_host() {
        let url = endpoint("http://localhost:8080").url(&["accounts"]);
        assert_eq!(url.as_str(), "http://localhost:8080/accounts");
    }

    #[test]
    fn keeps_base_path_prefix() {
        assert_eq!(
            endpoint("http://gateway/ledger/").url(&["transactions", "7"]).as_str(),
            "http://gateway/ledger/transactions/7"
        );
        assert_eq!(
            endpoint("http://gateway/ledger").url(&["accounts"]).as_str(),
            "http://gateway/ledger/accounts"
        );
    }

    #[test]
    fn escapes_path_segments() {
        let url = endpoint("http://localhost:8080").url(&["accounts", "a/b c"]);
        assert_eq!(url.as_str(), "http://localhost:8080/accounts/a%2Fb%20c");
    }

    #[test]
    fn rejects_invalid_base_urls() {
        for base in ["not a url", "mailto:ops@example.com", "ftp://files.example.com"] {
            match HttpEndpoint::new(Client::new(), base) {
                Err(ClientError::InvalidBaseUrl { url, .. }) => assert_eq!(url, base),
                other => panic!("Expected InvalidBaseUrl for {base}, got {other:?}"),
            }
        }
    }

    #[test]
    fn error_message_prefers_body_text() {
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, "Account not found\n"),
            "Account not found"
        );
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, r#"{"detail":"Database error: gone"}"#),
            "Database error: gone"
        );
        assert_eq!(
            error_message(StatusCode::SERVICE_UNAVAILABLE, "  "),
            "Service Unavailable"
        );
    }
}
