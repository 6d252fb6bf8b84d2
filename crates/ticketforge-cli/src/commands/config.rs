//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::{
    Config, CONFIG_FILE_NAME, CONTEXT_FILE_NAME, DEFAULT_SYSTEM_PROMPT, PROMPT_FILE_NAME,
};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::fs;
use std::path::Path;

const DEFAULT_CONTEXT: &str = "# Context\n\nNotes the model should know about your projects.\n";

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    dir: &Path,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Init => init(dir, formatter),
        ConfigAction::Show => {
            let rendered = toml::to_string_pretty(config)
                .map_err(|e| CliError::Config(format!("Failed to serialize config: {e}")))?;
            println!("{rendered}");
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", dir.join(CONFIG_FILE_NAME).display());
            Ok(())
        }
    }
}

/// Write default configuration and prompt files, never clobbering
/// existing ones.
fn init(dir: &Path, formatter: &Formatter) -> Result<()> {
    fs::create_dir_all(dir)?;

    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        println!("{}", formatter.info(&format!("{} already exists", config_path.display())));
    } else {
        Config::default().save(dir)?;
        println!("{}", formatter.success(&format!("wrote {}", config_path.display())));
    }

    for (file_name, contents) in [
        (PROMPT_FILE_NAME, DEFAULT_SYSTEM_PROMPT),
        (CONTEXT_FILE_NAME, DEFAULT_CONTEXT),
    ] {
        let path = dir.join(file_name);
        if path.exists() {
            println!("{}", formatter.info(&format!("{} already exists", path.display())));
        } else {
            fs::write(&path, contents)?;
            println!("{}", formatter.success(&format!("wrote {}", path.display())));
        }
    }

    Ok(())
}
