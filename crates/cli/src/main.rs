//! TyGenie CLI - Browse and act on Opsgenie alerts from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load settings and build the Opsgenie client.
//! - Print results as JSON and map absent results to exit codes.
//!
//! Does NOT handle:
//! - Pagination or REST API logic (see `crates/client`).
//! - Settings file parsing (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Diagnostics go to stderr; stdout only ever carries the JSON result.

mod args;
mod cancellation;
mod commands;
mod config_context;
mod dispatch;
mod error;
mod output;

use std::sync::Arc;

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use config_context::ConfigCommandContext;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use tygenie_client::ClientManager;
use tygenie_config::{ConfigLoader, SettingsProvider, SharedSettings};

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn load_settings(cli: &Cli) -> anyhow::Result<SharedSettings> {
    let mut loader = ConfigLoader::new();

    // Blank values are ignored to allow fallback to the environment
    if let Some(ref path) = cli.config_path {
        if !path.as_os_str().is_empty() {
            loader = loader.with_config_path(path.clone());
        }
    }
    if let Some(host) = non_blank(&cli.host) {
        loader = loader.with_host(host);
    }
    if let Some(key) = non_blank(&cli.api_key) {
        loader = loader.with_api_key(key);
    }
    if let Some(username) = non_blank(&cli.username) {
        loader = loader.with_username(username);
    }

    let settings = loader.from_file()?.from_env()?.build()?;
    Ok(SharedSettings::new(settings))
}

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_context = if matches!(cli.command, args::Commands::Config { .. }) {
        ConfigCommandContext::Placeholder
    } else {
        let settings = match load_settings(&cli) {
            Ok(s) => Arc::new(s),
            Err(e) => {
                eprintln!("Failed to load configuration: {:#}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        };

        if cli.command.needs_api() && !settings.settings().credentials().is_configured() {
            tracing::warn!(
                "Opsgenie host or API key is not configured; run `tygenie config init` \
                 or set OPSGENIE_HOST and OPSGENIE_API_KEY"
            );
        }

        let manager = match ClientManager::new(settings.clone()) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("Failed to build Opsgenie client: {:#}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        };
        ConfigCommandContext::Real(settings, manager)
    };

    // Create cancellation token and set up signal handling
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, config_context, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
