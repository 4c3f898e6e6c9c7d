//! Configuration context for command execution.
//!
//! Responsibilities:
//! - Carry the loaded settings and the live API client to command handlers.
//! - Keep the settings-only commands (`config`) from requiring a loadable file.
//!
//! Does NOT handle:
//! - Configuration loading (done in `main()`).
//! - CLI argument definitions (see `args` module).
//!
//! Invariants:
//! - A `Real` context always holds a client built from the same settings it carries.

use std::sync::Arc;

use tygenie_client::ClientManager;
use tygenie_config::SharedSettings;

/// Context for command execution.
pub(crate) enum ConfigCommandContext {
    /// Settings loaded from file, environment, and flags, with the client built on them.
    Real(Arc<SharedSettings>, ClientManager),
    /// No settings were loaded. Only valid for `config` commands.
    Placeholder,
}

impl ConfigCommandContext {
    /// Extract the client manager, failing if this is a placeholder.
    pub(crate) fn into_manager(self) -> anyhow::Result<ClientManager> {
        match self {
            ConfigCommandContext::Real(_, manager) => Ok(manager),
            ConfigCommandContext::Placeholder => {
                anyhow::bail!(
                    "Internal error: attempted to use placeholder config for an operation requiring Opsgenie access"
                )
            }
        }
    }

    /// Extract the settings, failing if this is a placeholder.
    pub(crate) fn into_settings(self) -> anyhow::Result<Arc<SharedSettings>> {
        match self {
            ConfigCommandContext::Real(settings, _) => Ok(settings),
            ConfigCommandContext::Placeholder => {
                anyhow::bail!(
                    "Internal error: attempted to use placeholder config for an operation requiring settings"
                )
            }
        }
    }
}
