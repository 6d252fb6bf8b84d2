//! Ticketforge Extractor
//!
//! Converts a free-form ticket description into a validated
//! [`TicketDraft`] using a generative language model.
//!
//! # Architecture
//!
//! ```text
//! Description → PromptBuilder → CompletionProvider → parser → TicketDraft
//! ```
//!
//! The provider returns unstructured text; the parser locates the one
//! JSON-object candidate inside it (markdown fences or a bare object),
//! parses it, and enforces the required fields. Normalization and
//! validation failures are typed and distinct, so callers can guide
//! the user accordingly.
//!
//! # Example Usage
//!
//! ```no_run
//! use ticketforge_extractor::{DraftRequest, ExtractorConfig, TicketExtractor};
//! use ticketforge_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new(
//!     r#"{"summary":"Fix bug","project_name_suggestion":"Web"}"#,
//! );
//! let extractor = TicketExtractor::new(provider, ExtractorConfig::default());
//!
//! let draft = extractor
//!     .draft(DraftRequest {
//!         user_input: "the login page is broken".to_string(),
//!         system_prompt: "You draft tickets.".to_string(),
//!         context: String::new(),
//!     })
//!     .await?;
//!
//! println!("Summary: {}", draft.summary);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod parser;
mod prompt;
mod types;

pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::TicketExtractor;
pub use parser::parse_response;
pub use prompt::PromptBuilder;
pub use types::{DraftRequest, TicketDraft};
