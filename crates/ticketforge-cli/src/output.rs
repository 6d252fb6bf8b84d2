//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde_json::Value;
use ticketforge_backend::CreatedIssue;
use ticketforge_domain::SearchResults;
use ticketforge_projection::{project_records, resolve_path};
use tracing::warn;

/// Sentinel line for empty result collections in text and tsv modes.
const NO_ISSUES: &str = "No issues found.";

/// Default tsv columns when no field list is requested.
const DEFAULT_TSV_FIELDS: [&str; 4] = [
    "key",
    "fields.summary",
    "fields.status.name",
    "fields.issuetype.name",
];

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format search results.
    ///
    /// `fields` is the caller's requested field-path list, already
    /// split and trimmed; `Some` but empty means the flag was supplied
    /// with nothing usable in it.
    pub fn format_search(
        &self,
        results: &SearchResults,
        fields: Option<&[String]>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.format_search_text(results)),
            OutputFormat::Json => self.format_search_json(results, fields),
            OutputFormat::Yaml => self.format_search_yaml(results, fields),
            OutputFormat::Tsv => Ok(format_search_tsv(results, fields)),
        }
    }

    fn format_search_text(&self, results: &SearchResults) -> String {
        if results.issues.is_empty() {
            return NO_ISSUES.to_string();
        }

        let mut lines = vec![format!("Found {} issues:", results.issues.len())];
        for issue in &results.issues {
            lines.push(format!(
                "- {} - {} - {}",
                issue.key, issue.fields.status.name, issue.fields.summary
            ));
        }
        lines.join("\n")
    }

    fn format_search_json(
        &self,
        results: &SearchResults,
        fields: Option<&[String]>,
    ) -> Result<String> {
        match fields {
            // Filtered: the projected maps only
            Some(paths) if !paths.is_empty() => {
                let projections = project_records(&results.issues, paths);
                Ok(serde_json::to_string_pretty(&projections)?)
            }
            // Full object: the untouched result envelope
            _ => Ok(serde_json::to_string_pretty(results)?),
        }
    }

    fn format_search_yaml(
        &self,
        results: &SearchResults,
        fields: Option<&[String]>,
    ) -> Result<String> {
        match fields {
            Some(paths) if !paths.is_empty() => {
                let projections = project_records(&results.issues, paths);
                Ok(serde_yaml::to_string(&projections)?)
            }
            // Full object: the record list
            _ => Ok(serde_yaml::to_string(&results.issues)?),
        }
    }

    /// Format a created issue.
    pub fn format_created(&self, created: &CreatedIssue) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(created)?),
            _ => Ok(format!(
                "Successfully created issue:\nKey: {}\nURL: {}",
                created.key, created.self_url
            )),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {message}"), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {message}"), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {message}"), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {message}"), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Render the delimited (tab-separated) mode.
///
/// One header row of field paths, one row per record. An empty
/// collection emits the sentinel line alone — no header, no rows.
fn format_search_tsv(results: &SearchResults, fields: Option<&[String]>) -> String {
    if results.issues.is_empty() {
        return NO_ISSUES.to_string();
    }

    let default_fields: Vec<String> = DEFAULT_TSV_FIELDS.iter().map(|s| s.to_string()).collect();
    let columns: &[String] = match fields {
        Some(requested) if !requested.is_empty() => requested,
        Some(_) => {
            warn!("field list was supplied but empty, using default tsv columns");
            default_fields.as_slice()
        }
        None => default_fields.as_slice(),
    };

    let mut lines = Vec::with_capacity(results.issues.len() + 1);
    lines.push(columns.join("\t"));

    for issue in &results.issues {
        let row: Vec<String> = columns
            .iter()
            .map(|path| match resolve_path(issue, path) {
                Some(value) if !value.is_null() => cell_text(&value),
                _ => String::new(),
            })
            .collect();
        lines.push(row.join("\t"));
    }

    lines.join("\n")
}

/// Coerce a resolved value to its default text form and sanitize it
/// for one tsv cell: tabs, carriage returns, and newlines each become
/// a single space.
fn cell_text(value: &Value) -> String {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    text.replace(['\t', '\r', '\n'], " ")
}
