//! Create command implementation.

use crate::cli::CreateArgs;
use crate::config::{self, Config};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::io::{self, BufRead, Write};
use std::path::Path;
use ticketforge_backend::{BackendClient, CreateIssueRequest};
use ticketforge_extractor::{DraftRequest, ExtractorConfig, TicketExtractor};
use ticketforge_llm::{openai, OpenAiProvider};
use tracing::{debug, info};

/// Execute the create command.
pub async fn execute_create(
    args: CreateArgs,
    dir: &Path,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let api_key = std::env::var(&config.llm.api_key_env)
        .map_err(|_| CliError::ApiKeyMissing(config.llm.api_key_env.clone()))?;
    let endpoint = config
        .llm
        .base_url
        .clone()
        .unwrap_or_else(|| openai::DEFAULT_ENDPOINT.to_string());

    let provider = OpenAiProvider::new(endpoint, &config.llm.model, api_key)?;
    let extractor = TicketExtractor::new(provider, ExtractorConfig::default());

    let draft = extractor
        .draft(DraftRequest {
            user_input: args.description.join(" "),
            system_prompt: config::load_system_prompt(dir),
            context: config::load_context(dir),
        })
        .await?;

    let link = config
        .map_project(&draft.project_suggestion)
        .ok_or_else(|| CliError::ProjectMapping(draft.project_suggestion.clone()))?;
    let issue_type = config::resolve_issue_type(args.issue_type.as_deref(), Some(link));
    debug!(project_key = %link.key, %issue_type, "resolved creation target");

    let request = CreateIssueRequest {
        project_key: link.key.clone(),
        summary: draft.summary,
        description: draft.description,
        issue_type,
    };

    if args.interactive && !confirm(&request)? {
        println!("Aborted.");
        return Ok(());
    }

    let client = BackendClient::new(&config.backend.url)?;
    let created = client.create(&request).await?;
    info!(key = %created.key, "issue created");

    println!("{}", formatter.format_created(&created)?);
    Ok(())
}

/// Show the prepared request and ask for confirmation.
fn confirm(request: &CreateIssueRequest) -> Result<bool> {
    println!("\n--- Issue Details ---");
    println!("Project Key: {}", request.project_key);
    println!("Issue Type:  {}", request.issue_type);
    println!("Summary:     {}", request.summary);
    println!("Description:\n{}", request.description);
    println!("---------------------");
    print!("Create this issue? [y/N]: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(is_affirmative(&input))
}

fn is_affirmative(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
