//! Request and result types for draft extraction

use serde::{Deserialize, Serialize};

/// Request to draft a ticket from a free-form description
#[derive(Debug, Clone)]
pub struct DraftRequest {
    /// The user's description of the ticket
    pub user_input: String,

    /// Base instructions for the model
    pub system_prompt: String,

    /// Optional contextual information (projects, conventions, ...)
    pub context: String,
}

/// A validated ticket draft extracted from a model completion.
///
/// Built once per creation request and consumed immediately; never
/// persisted or mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketDraft {
    /// One-line summary. Always non-empty.
    pub summary: String,

    /// Long-form description. May be empty.
    pub description: String,

    /// The model's suggested project name. Always non-empty; mapping
    /// to a project key happens downstream.
    pub project_suggestion: String,
}
