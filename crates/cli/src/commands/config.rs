//! Settings file management commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use tygenie_config::{
    ConfigLoader, FilterDefinition, Settings, read_settings_file, write_settings_file,
};

use crate::output::print_json;

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a template settings file
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },

    /// Print the settings file path in use
    Path,

    /// Print the settings file (API key redacted)
    Show,
}

pub fn run(command: ConfigCommand, config_path: Option<PathBuf>, pretty: bool) -> Result<()> {
    let path = resolve_path(config_path)?;

    match command {
        ConfigCommand::Init { force } => run_init(&path, force),
        ConfigCommand::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommand::Show => run_show(&path, pretty),
    }
}

fn resolve_path(config_path: Option<PathBuf>) -> Result<PathBuf> {
    let loader = match config_path {
        Some(path) if !path.as_os_str().is_empty() => ConfigLoader::new().with_config_path(path),
        _ => ConfigLoader::new(),
    };
    loader
        .resolve_config_path()
        .context("Failed to resolve settings file path")
}

/// Settings written by `config init`: default host and two starter filters.
fn template() -> Settings {
    let mut settings = Settings::default();
    settings.opsgenie.host = "https://api.opsgenie.com".to_string();
    settings.tygenie.filters.insert(
        "open".to_string(),
        FilterDefinition {
            filter: "status:open".to_string(),
            description: Some("All open alerts".to_string()),
        },
    );
    settings.tygenie.filters.insert(
        "unacked".to_string(),
        FilterDefinition {
            filter: "status:open AND acknowledged:false".to_string(),
            description: Some("Open alerts nobody has acknowledged".to_string()),
        },
    );
    settings.tygenie.default_filter = Some("open".to_string());
    settings
}

fn run_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Settings file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    write_settings_file(path, &template())
        .with_context(|| format!("Failed to write settings file {}", path.display()))?;
    eprintln!("Settings written to {}", path.display());
    Ok(())
}

fn run_show(path: &Path, pretty: bool) -> Result<()> {
    let settings = read_settings_file(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;

    let mut value = serde_json::to_value(&settings).context("Failed to serialize settings")?;
    if let Some(key) = value.pointer_mut("/opsgenie/api_key") {
        *key = serde_json::Value::from("********");
    }
    print_json(&value, pretty)
}
