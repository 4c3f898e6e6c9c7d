//! Configuration management for TyGenie.
//!
//! This crate provides the settings document consumed by the Opsgenie client:
//! credentials, named alert filters, paging and activity-log preferences,
//! loaded from a JSON file, `.env`, and environment variables, and shared
//! through a hot-reloadable [`SettingsProvider`].

pub mod constants;
mod loader;
pub mod persistence;
mod provider;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use persistence::{default_config_path, read_settings_file, write_settings_file};
pub use provider::{SettingsProvider, SharedSettings};
pub use types::{
    AlertSettings, Credentials, FilterDefinition, LogSettings, OpsgenieSettings, Settings,
    TygenieSettings,
};
