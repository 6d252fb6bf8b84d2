//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while turning a completion into a ticket
/// draft
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Provider returned no usable content
    #[error("received an empty response from the model")]
    EmptyResponse,

    /// Input exceeds maximum length
    #[error("Input too long: {0} chars (max: {1})")]
    InputTooLong(usize, usize),

    /// Completion request timed out
    #[error("Completion timeout")]
    Timeout,

    /// No JSON candidate could be located in the completion
    #[error("no JSON object found in the model response")]
    JsonNotFound,

    /// A candidate was found but failed to parse
    #[error("failed to parse model response JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// Parsed successfully but a mandatory field is empty or absent
    #[error("model response is missing required field: {0}")]
    MissingField(&'static str),
}
