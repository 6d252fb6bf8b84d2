//! Parse a model completion into a validated ticket draft
//!
//! Models wrap their JSON in prose, markdown code fences, or both.
//! Normalization locates the one JSON-object candidate inside the
//! completion; validation parses it and enforces required fields.

use crate::error::ExtractorError;
use crate::types::TicketDraft;
use serde::Deserialize;
use tracing::debug;

/// The documented draft keys. Unknown keys are ignored.
#[derive(Debug, Deserialize)]
struct RawDraft {
    #[serde(default)]
    summary: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    project_name_suggestion: String,
}

/// Normalize and validate a raw completion into a [`TicketDraft`].
///
/// Required fields are checked in fixed order: `summary` first, then
/// `project_name_suggestion`; the first missing one is reported.
/// `description` is optional and defaults to empty.
pub fn parse_response(raw: &str) -> Result<TicketDraft, ExtractorError> {
    let candidate = extract_json(raw)?;
    debug!(candidate, "normalized completion candidate");

    let draft: RawDraft = serde_json::from_str(candidate)?;

    if draft.summary.is_empty() {
        return Err(ExtractorError::MissingField("summary"));
    }
    if draft.project_name_suggestion.is_empty() {
        return Err(ExtractorError::MissingField("project_name_suggestion"));
    }

    Ok(TicketDraft {
        summary: draft.summary,
        description: draft.description,
        project_suggestion: draft.project_name_suggestion,
    })
}

/// Locate the JSON candidate inside a completion.
///
/// Primary strategy: the first block delimited by three-or-more
/// backticks, with an optional case-insensitive `json` tag after the
/// opening fence. An opened-but-unterminated fence fails outright; the
/// brace fallback only applies when no fence marker appears at all.
fn extract_json(raw: &str) -> Result<&str, ExtractorError> {
    if let Some(open) = raw.find("```") {
        let marker_len = raw[open..].bytes().take_while(|&b| b == b'`').count();
        let mut interior = &raw[open + marker_len..];

        // Optional language tag directly after the opening fence
        if interior
            .get(..4)
            .is_some_and(|tag| tag.eq_ignore_ascii_case("json"))
        {
            interior = &interior[4..];
        }

        let marker = "`".repeat(marker_len);
        let close = interior
            .find(&marker)
            .ok_or(ExtractorError::JsonNotFound)?;
        return Ok(interior[..close].trim());
    }

    // No fence anywhere: accept the whole input if it looks like a
    // bare JSON object.
    let trimmed = raw.trim();
    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        Ok(trimmed)
    } else {
        Err(ExtractorError::JsonNotFound)
    }
}
