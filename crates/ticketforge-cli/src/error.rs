//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Draft extraction error
    #[error("Extraction error: {0}")]
    Extract(#[from] ticketforge_extractor::ExtractorError),

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(#[from] ticketforge_llm::LlmError),

    /// Ticket backend error
    #[error("Backend error: {0}")]
    Backend(#[from] ticketforge_backend::BackendError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// API key environment variable not set
    #[error("LLM API key not found in environment variable {0}")]
    ApiKeyMissing(String),

    /// The model's project suggestion matched no configured project
    #[error("could not map project suggestion '{0}' to a configured project key")]
    ProjectMapping(String),
}
