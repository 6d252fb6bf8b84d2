//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ticketforge CLI - Create and search tickets with a language-model assist.
#[derive(Debug, Parser)]
#[command(name = "tkt")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration directory (default: ~/.ticketforge)
    #[arg(short, long, global = true, env = "TICKETFORGE_CONFIG_DIR")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// Tab-separated values
    Tsv,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new ticket from a free-form description
    Create(CreateArgs),

    /// Search for tickets
    Search(SearchArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for the create command.
#[derive(Debug, Parser)]
pub struct CreateArgs {
    /// Description of the ticket to create
    #[arg(required = true)]
    pub description: Vec<String>,

    /// Issue type (e.g. Task, Bug) - overrides the configured default
    #[arg(short = 't', long = "type")]
    pub issue_type: Option<String>,

    /// Prompt for confirmation before creating the ticket
    #[arg(short, long)]
    pub interactive: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<CliFormat>,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Query terms
    pub terms: Vec<String>,

    /// Full query string (alternative to positional terms)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Maximum number of results to return
    #[arg(short, long, default_value_t = 20)]
    pub max_results: u32,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<CliFormat>,

    /// Comma-separated field paths to include in the output
    /// (e.g. key,fields.summary,fields.status.name)
    #[arg(short, long)]
    pub fields: Option<String>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Write default configuration and prompt files
    Init,

    /// Show the effective configuration
    Show,

    /// Print the configuration file path
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Yaml => crate::config::OutputFormat::Yaml,
            CliFormat::Tsv => crate::config::OutputFormat::Tsv,
        }
    }
}
