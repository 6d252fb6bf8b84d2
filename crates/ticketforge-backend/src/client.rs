//! Ticket backend client implementation.

use crate::error::BackendError;
use crate::types::{CreateIssueRequest, CreatedIssue, ErrorResponse, SearchRequest};
use std::time::Duration;
use ticketforge_domain::SearchResults;
use tracing::debug;

/// Default timeout for backend requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// JSON-over-HTTP client for the ticket backend
pub struct BackendClient {
    base_url: String,
    client: reqwest::Client,
}

impl BackendClient {
    /// Create a new client against `base_url`.
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        if base_url.trim().is_empty() {
            return Err(BackendError::InvalidUrl(
                "backend URL is not configured".to_string(),
            ));
        }
        reqwest::Url::parse(base_url)
            .map_err(|e| BackendError::InvalidUrl(format!("{base_url}: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| BackendError::Connection(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Search issues matching the request's query.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResults, BackendError> {
        debug!(query = %request.query, "searching issues");
        let url = format!("{}/search_issues", self.base_url);
        let response = self.client.post(&url).json(request).send().await?;
        decode(response).await
    }

    /// Create a new issue.
    pub async fn create(&self, request: &CreateIssueRequest) -> Result<CreatedIssue, BackendError> {
        debug!(project_key = %request.project_key, "creating issue");
        let url = format!("{}/create_issue", self.base_url);
        let response = self.client.post(&url).json(request).send().await?;
        decode(response).await
    }
}

/// Decode a success payload, or surface the backend's error payload.
async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, BackendError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(payload) => Err(BackendError::Server(payload.error)),
            Err(_) => Err(BackendError::UnparseableError(status.as_u16())),
        };
    }

    response
        .json::<T>()
        .await
        .map_err(|e| BackendError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_rejects_empty_url() {
        let result = BackendClient::new("   ");
        assert!(matches!(result, Err(BackendError::InvalidUrl(_))));
    }

    #[test]
    fn test_client_rejects_unparseable_url() {
        let result = BackendClient::new("not a url");
        assert!(matches!(result, Err(BackendError::InvalidUrl(_))));
    }

    #[test]
    fn test_client_normalizes_trailing_slash() {
        let client = BackendClient::new("http://localhost:9090/").unwrap();
        assert_eq!(client.base_url, "http://localhost:9090");
    }

    #[tokio::test]
    async fn test_search_connection_error() {
        // Nothing listens on this port
        let client = BackendClient::new("http://127.0.0.1:1").unwrap();
        let request = SearchRequest {
            query: "project = WEB".to_string(),
            max_results: Some(5),
            start_at: None,
        };
        let result = client.search(&request).await;
        assert!(matches!(result, Err(BackendError::Connection(_))));
    }
}
