//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Extract the settings or client each command needs from the context.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()` and `config_context`).
//!
//! Invariants:
//! - All API commands receive the cancellation token

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;
use crate::config_context::ConfigCommandContext;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(
    cli: Cli,
    config: ConfigCommandContext,
    cancel_token: &CancellationToken,
) -> Result<()> {
    let pretty = cli.pretty;
    match cli.command {
        Commands::Config { command } => {
            commands::config::run(command, cli.config_path.clone(), pretty)?;
        }
        Commands::Alerts { command } => {
            let manager = config.into_manager()?;
            commands::alerts::run(manager, command, pretty, cancel_token).await?;
        }
        Commands::Schedules => {
            let manager = config.into_manager()?;
            commands::schedules::run_schedules(manager, pretty, cancel_token).await?;
        }
        Commands::Oncall { date, no_flat } => {
            let manager = config.into_manager()?;
            commands::schedules::run_oncall(manager, date, no_flat, pretty, cancel_token).await?;
        }
        Commands::Whoami => {
            let manager = config.into_manager()?;
            commands::account::run(manager, pretty, cancel_token).await?;
        }
        Commands::Filters => {
            let settings = config.into_settings()?;
            commands::filters::run(&settings, pretty)?;
        }
    }

    Ok(())
}
