//! Error types for the backend client.

use thiserror::Error;

/// Backend client errors
#[derive(Debug, Error)]
pub enum BackendError {
    /// Backend URL missing or unusable
    #[error("Backend URL error: {0}")]
    InvalidUrl(String),

    /// Connection error (network, DNS, etc.)
    #[error("Connection error: {0}")]
    Connection(String),

    /// The backend returned an error payload
    #[error("Backend error: {0}")]
    Server(String),

    /// The backend returned an error we could not parse
    #[error("Backend returned an unparseable error (HTTP {0})")]
    UnparseableError(u16),

    /// Failed to decode a success response
    #[error("Failed to decode backend response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            BackendError::Connection(e.to_string())
        } else if e.is_decode() {
            BackendError::Decode(e.to_string())
        } else {
            BackendError::Server(e.to_string())
        }
    }
}
