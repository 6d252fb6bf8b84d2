//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the main configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Name of the system prompt file.
pub const PROMPT_FILE_NAME: &str = "system_prompt.txt";
/// Name of the context file.
pub const CONTEXT_FILE_NAME: &str = "context.md";

/// Fallback issue type when neither the flag nor the matched project
/// link provides one.
pub const DEFAULT_ISSUE_TYPE: &str = "Task";

/// Embedded default system prompt, written out by `tkt config init`.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an assistant that turns free-form ticket \
descriptions into structured ticket drafts. Be concise and factual.";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Ticket backend settings
    #[serde(default)]
    pub backend: BackendConfig,

    /// LLM provider settings
    #[serde(default)]
    pub llm: LlmConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Known projects, matched against the model's suggestion
    #[serde(default)]
    pub projects: Vec<ProjectLink>,
}

/// Ticket backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend base URL
    pub url: String,
}

/// LLM provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Provider name (only "openai"-compatible APIs for now)
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Optional custom API base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

/// A configured project the model's suggestion can map to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectLink {
    /// Human-readable project name (matched case-insensitively)
    pub name: String,

    /// Backend project key
    pub key: String,

    /// Default issue type for this project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_issue_type: Option<String>,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// Tab-separated values
    Tsv,
}

impl Config {
    /// Resolve the configuration directory.
    ///
    /// Precedence: explicit override (flag or TICKETFORGE_CONFIG_DIR,
    /// both handled by clap), then `~/.ticketforge`.
    pub fn dir(override_dir: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = override_dir {
            return Ok(dir.to_path_buf());
        }
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".ticketforge"))
    }

    /// Load configuration from `dir/config.toml`, or defaults if the
    /// file does not exist.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to `dir/config.toml`.
    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {e}")))?;
        fs::write(dir.join(CONFIG_FILE_NAME), contents)?;
        Ok(())
    }

    /// Find the project link matching the model's suggestion,
    /// case-insensitively.
    pub fn map_project(&self, suggestion: &str) -> Option<&ProjectLink> {
        self.projects
            .iter()
            .find(|link| link.name.eq_ignore_ascii_case(suggestion))
    }
}

/// Load the system prompt from `dir`, falling back to the embedded
/// default.
pub fn load_system_prompt(dir: &Path) -> String {
    fs::read_to_string(dir.join(PROMPT_FILE_NAME))
        .unwrap_or_else(|_| DEFAULT_SYSTEM_PROMPT.to_string())
}

/// Load the context block from `dir`; absent file means no context.
pub fn load_context(dir: &Path) -> String {
    fs::read_to_string(dir.join(CONTEXT_FILE_NAME)).unwrap_or_default()
}

/// Resolve the final issue type: explicit flag, then the matched
/// project's default, then [`DEFAULT_ISSUE_TYPE`].
pub fn resolve_issue_type(flag: Option<&str>, link: Option<&ProjectLink>) -> String {
    if let Some(explicit) = flag {
        if !explicit.is_empty() {
            return explicit.to_string();
        }
    }
    if let Some(link) = link {
        if let Some(default) = &link.default_issue_type {
            if !default.is_empty() {
                return default.clone();
            }
        }
    }
    DEFAULT_ISSUE_TYPE.to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:9090".to_string(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            base_url: None,
            api_key_env: default_api_key_env(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
        }
    }
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_api_key_env() -> String {
    "TICKETFORGE_API_KEY".to_string()
}

fn default_true() -> bool {
    true
}
