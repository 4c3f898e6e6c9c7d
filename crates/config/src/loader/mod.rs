//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Load settings from `.env` files, environment variables, and the JSON settings file.
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Persisting configuration changes back to disk (see `persistence.rs`).
//! - Sharing or hot-swapping loaded settings (see `provider.rs`).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over settings file values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
