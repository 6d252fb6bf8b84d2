//! OpenAI-compatible Provider Implementation
//!
//! Speaks the chat completions API shared by OpenAI and the many
//! compatible gateways, so a custom `base_url` is enough to point the
//! tool at another vendor.
//!
//! # Features
//!
//! - Async HTTP communication via the chat completions endpoint
//! - Configurable endpoint and model
//! - Retry logic with exponential backoff
//! - Timeout handling

use crate::{CompletionProvider, LlmError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default model
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default timeout for completion requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Chat-completions provider for OpenAI-compatible APIs
pub struct OpenAiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
    max_retries: u32,
}

/// Request body for the chat completions API
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// Response from the chat completions API
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl OpenAiProvider {
    /// Create a new provider.
    ///
    /// # Parameters
    ///
    /// - `endpoint`: API base URL (e.g. `https://api.openai.com/v1`)
    /// - `model`: model to use (e.g. `gpt-4o`)
    /// - `api_key`: bearer token for the API
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::Communication(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Create a provider against the default endpoint
    pub fn default_endpoint(
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, LlmError> {
        Self::new(DEFAULT_ENDPOINT, model, api_key)
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    async fn request_completion(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.endpoint.trim_end_matches('/'));

        let request_body = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
        };

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let chat: ChatResponse = response.json().await.map_err(|e| {
                            LlmError::InvalidResponse(format!("Failed to parse response: {e}"))
                        })?;
                        let content = chat
                            .choices
                            .into_iter()
                            .next()
                            .and_then(|choice| choice.message.content)
                            .ok_or_else(|| {
                                LlmError::InvalidResponse(
                                    "Response contained no choices".to_string(),
                                )
                            })?;
                        return Ok(content);
                    } else if status == reqwest::StatusCode::UNAUTHORIZED {
                        return Err(LlmError::Unauthorized);
                    } else if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        // Retryable; fall through to backoff
                        warn!(attempt = attempts + 1, "rate limited, backing off");
                        last_error = Some(LlmError::RateLimitExceeded);
                    } else {
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error =
                            Some(LlmError::Communication(format!("HTTP {status}: {error_text}")));
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {e}")));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, ...
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                debug!(attempt = attempts, ?delay, "retrying completion request");
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.request_completion(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_creation() {
        let provider = OpenAiProvider::new("https://api.openai.com/v1", "gpt-4o", "sk-test")
            .unwrap();
        assert_eq!(provider.endpoint, "https://api.openai.com/v1");
        assert_eq!(provider.model, "gpt-4o");
        assert_eq!(provider.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_provider_default_endpoint() {
        let provider = OpenAiProvider::default_endpoint("gpt-4o-mini", "sk-test").unwrap();
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(provider.model, "gpt-4o-mini");
    }

    #[test]
    fn test_provider_with_max_retries() {
        let provider = OpenAiProvider::default_endpoint("gpt-4o", "sk-test")
            .unwrap()
            .with_max_retries(5);
        assert_eq!(provider.max_retries, 5);
    }

    #[tokio::test]
    async fn test_provider_error_handling() {
        // Unroutable endpoint to trigger a communication error
        let provider = OpenAiProvider::new("http://127.0.0.1:1", "gpt-4o", "sk-test")
            .unwrap()
            .with_max_retries(1);

        let result = provider.complete("test").await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }
}
