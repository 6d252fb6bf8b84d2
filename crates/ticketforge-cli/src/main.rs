//! Ticketforge CLI - Create and search tickets with a language-model assist.

use clap::Parser;
use ticketforge_cli::commands;
use ticketforge_cli::{Cli, CliError, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        if let Some(hint) = hint_for(&e) {
            eprintln!("{hint}");
        }
        std::process::exit(1);
    }
}

async fn run() -> ticketforge_cli::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let dir = Config::dir(cli.config.as_deref())?;
    let config = Config::load(&dir)?;
    let color_enabled = !cli.no_color && config.settings.color;

    match cli.command {
        Command::Create(args) => {
            let format = args.output.map(Into::into).unwrap_or(config.settings.format);
            let formatter = Formatter::new(format, color_enabled);
            commands::execute_create(args, &dir, &config, &formatter).await
        }
        Command::Search(args) => {
            let format = args.output.map(Into::into).unwrap_or(config.settings.format);
            let formatter = Formatter::new(format, color_enabled);
            commands::execute_search(args, &config, &formatter).await
        }
        Command::Config(args) => {
            let formatter = Formatter::new(config.settings.format, color_enabled);
            commands::execute_config(args, &dir, &config, &formatter)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// A follow-up line for error categories where the user can act.
fn hint_for(error: &CliError) -> Option<&'static str> {
    match error {
        CliError::ApiKeyMissing(_) => {
            Some("Export the key in that environment variable, or change llm.api_key_env in config.toml.")
        }
        CliError::Extract(_) => {
            Some("The model may have returned an unexpected format. Re-run with -v to inspect the exchange.")
        }
        CliError::Backend(_) => {
            Some("Ensure the ticket backend is running and backend.url in config.toml is correct.")
        }
        CliError::ProjectMapping(_) => {
            Some("Check the [[projects]] table in config.toml, or re-word the request.")
        }
        CliError::Config(_) | CliError::Toml(_) => Some("You might need to run 'tkt config init'."),
        _ => None,
    }
}
