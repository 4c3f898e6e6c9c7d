//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not handle config loading (see `main()` and `config_context`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "tygenie")]
#[command(about = "TyGenie - Browse and act on Opsgenie alerts from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  tygenie alerts list --filter open\n  tygenie alerts list --page 3 --with-count\n  tygenie alerts ack 1791 --note 'looking'\n  tygenie alerts tag 1791 --tag db --tag p1\n  tygenie oncall\n  tygenie --host https://api.eu.opsgenie.com whoami\n"
)]
pub struct Cli {
    /// Opsgenie API base URL (e.g., https://api.opsgenie.com)
    #[arg(long, global = true, env = "OPSGENIE_HOST")]
    pub host: Option<String>,

    /// Opsgenie API key
    #[arg(short = 'k', long, global = true, env = "OPSGENIE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// User recorded on acknowledge, close, note, and tag actions
    #[arg(short, long, global = true, env = "OPSGENIE_USERNAME")]
    pub username: Option<String>,

    /// Path to a custom settings file (overrides default location).
    ///
    /// Can also be set via TYGENIE_CONFIG_PATH environment variable.
    #[arg(long, global = true, env = "TYGENIE_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the settings file
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommand,
    },

    /// List, inspect, and act on alerts
    Alerts {
        #[command(subcommand)]
        command: commands::alerts::AlertsCommand,
    },

    /// List on-call schedules
    Schedules,

    /// Show who is on call for every schedule
    Oncall {
        /// Point in time to look up (RFC 3339, defaults to now)
        #[arg(long, value_name = "RFC3339")]
        date: Option<String>,

        /// Return structured participants instead of flat user names
        #[arg(long)]
        no_flat: bool,
    },

    /// Show the Opsgenie account the API key belongs to
    Whoami,

    /// List configured alert filters
    Filters,
}

impl Commands {
    /// Whether the command talks to Opsgenie.
    pub fn needs_api(&self) -> bool {
        !matches!(self, Commands::Config { .. } | Commands::Filters)
    }
}
