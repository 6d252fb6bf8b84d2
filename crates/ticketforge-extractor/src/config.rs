//! Configuration for the Extractor

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum user input length (characters)
    pub max_input_length: usize,

    /// Maximum time for a single completion call (seconds)
    pub completion_timeout_secs: u64,
}

impl ExtractorConfig {
    /// Get the completion timeout as a Duration
    pub fn completion_timeout(&self) -> Duration {
        Duration::from_secs(self.completion_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_input_length == 0 {
            return Err("max_input_length must be greater than 0".to_string());
        }
        if self.completion_timeout_secs == 0 {
            return Err("completion_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_input_length: 8_000,
            completion_timeout_secs: 120,
        }
    }
}
