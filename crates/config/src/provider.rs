//! Read-only settings access with hot reload.
//!
//! Responsibilities:
//! - Define the `SettingsProvider` seam every consumer reads settings through.
//! - Hold a swappable settings snapshot (`SharedSettings`) that can be replaced,
//!   edited, or reloaded from its original sources while readers keep running.
//!
//! Does NOT handle:
//! - Parsing files or environment variables (delegated to `ConfigLoader`).
//! - Writing settings back to disk (see `persistence`).
//!
//! Invariants:
//! - `settings()` always returns the latest snapshot; consumers must not cache it
//!   across operations if they want config edits to take effect.
//! - A reader holding an older `Arc<Settings>` is never affected by a swap.
//! - A failed `reload()` keeps the previous snapshot.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use crate::loader::{ConfigError, ConfigLoader};
use crate::types::Settings;

/// Source of the current settings snapshot.
pub trait SettingsProvider: Send + Sync {
    /// Current settings snapshot.
    fn settings(&self) -> Arc<Settings>;
}

/// A fixed snapshot never changes; useful for one-shot commands and tests.
impl SettingsProvider for Settings {
    fn settings(&self) -> Arc<Settings> {
        Arc::new(self.clone())
    }
}

/// Hot-reloadable settings shared between the API client and the query engine.
#[derive(Debug)]
pub struct SharedSettings {
    current: RwLock<Arc<Settings>>,
    config_path: Option<PathBuf>,
}

impl SharedSettings {
    /// Wrap an already-built settings snapshot.
    ///
    /// `reload()` on such an instance re-reads the default config file location
    /// and the environment.
    pub fn new(settings: Settings) -> Self {
        Self {
            current: RwLock::new(Arc::new(settings)),
            config_path: None,
        }
    }

    /// Load settings from `path` (or the default location) plus the environment.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let settings = Self::loader(config_path.clone()).from_file()?.from_env()?.build()?;
        Ok(Self {
            current: RwLock::new(Arc::new(settings)),
            config_path,
        })
    }

    fn loader(config_path: Option<PathBuf>) -> ConfigLoader {
        match config_path {
            Some(path) => ConfigLoader::new().with_config_path(path),
            None => ConfigLoader::new(),
        }
    }

    /// Path this instance reloads from, when one was given explicitly.
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    /// Swap in a new snapshot.
    pub fn replace(&self, settings: Settings) {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(settings);
    }

    /// Apply an edit to a copy of the current snapshot and swap it in.
    pub fn update<F>(&self, edit: F)
    where
        F: FnOnce(&mut Settings),
    {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        let mut next = Settings::clone(&guard);
        edit(&mut next);
        *guard = Arc::new(next);
    }

    /// Re-read the config file and environment and swap in the result.
    ///
    /// # Errors
    ///
    /// Returns the loader error; the previous snapshot stays in place.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let loaded = Self::loader(self.config_path.clone())
            .from_file()
            .and_then(ConfigLoader::from_env)
            .and_then(ConfigLoader::build);

        match loaded {
            Ok(settings) => {
                debug!("Settings reloaded");
                self.replace(settings);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Settings reload failed, keeping previous settings");
                Err(e)
            }
        }
    }
}

impl SettingsProvider for SharedSettings {
    fn settings(&self) -> Arc<Settings> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
