//! Search command implementation.

use crate::cli::SearchArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use ticketforge_backend::{BackendClient, SearchRequest};
use tracing::info;

/// Execute the search command.
pub async fn execute_search(args: SearchArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let query = match &args.query {
        Some(flag_query) => flag_query.clone(),
        None if !args.terms.is_empty() => args.terms.join(" "),
        None => {
            return Err(CliError::InvalidInput(
                "no search query provided; pass it as arguments or via --query".to_string(),
            ))
        }
    };

    let client = BackendClient::new(&config.backend.url)?;
    let results = client
        .search(&SearchRequest {
            query,
            max_results: Some(args.max_results),
            start_at: None,
        })
        .await?;

    info!(count = results.issues.len(), "search returned");

    let fields = args.fields.as_deref().map(parse_field_list);
    println!("{}", formatter.format_search(&results, fields.as_deref())?);

    Ok(())
}

/// Split a comma-separated field list, trimming entries and dropping
/// blank ones.
fn parse_field_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_list() {
        assert_eq!(
            parse_field_list("key, fields.summary ,fields.status.name"),
            ["key", "fields.summary", "fields.status.name"]
        );
    }

    #[test]
    fn test_parse_field_list_drops_blanks() {
        assert_eq!(parse_field_list("key,, ,fields.summary"), ["key", "fields.summary"]);
        assert!(parse_field_list(",,, ").is_empty());
    }
}
