//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from the settings file, environment variables, and direct builder methods.
//! - Build the final `Settings` from loaded values.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Persisting configuration changes (see persistence.rs).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over settings file values.
//! - Builder methods take precedence over environment variables.
//! - A missing settings file is not an error; settings may be unconfigured.

use secrecy::SecretString;
use std::path::PathBuf;
use tracing::debug;

use super::env::{apply_env, config_path_from_env};
use super::error::ConfigError;
use crate::persistence::{default_config_path, read_settings_file};
use crate::types::Settings;

/// Configuration loader that builds settings from the settings file and environment.
#[derive(Default)]
pub struct ConfigLoader {
    host: Option<String>,
    api_key: Option<SecretString>,
    username: Option<String>,
    alert_limit: Option<i64>,
    log_enable: Option<bool>,
    log_file: Option<PathBuf>,
    config_path: Option<PathBuf>,
    file_settings: Option<Settings>,
    // Builder-method values win over environment values, so they are kept apart.
    pinned: Pinned,
}

#[derive(Default)]
struct Pinned {
    host: bool,
    api_key: bool,
    username: bool,
    alert_limit: bool,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax or
    /// cannot be read. Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the settings file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Set the Opsgenie base URL, overriding file and environment.
    pub fn with_host(mut self, host: String) -> Self {
        self.host = Some(host);
        self.pinned.host = true;
        self
    }

    /// Set the API key, overriding file and environment.
    pub fn with_api_key(mut self, key: String) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self.pinned.api_key = true;
        self
    }

    /// Set the Opsgenie username, overriding file and environment.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self.pinned.username = true;
        self
    }

    /// Set the alert page size, overriding file and environment.
    pub fn with_alert_limit(mut self, limit: i64) -> Self {
        self.alert_limit = Some(limit);
        self.pinned.alert_limit = true;
        self
    }

    pub(crate) fn set_host(&mut self, host: Option<String>) {
        if !self.pinned.host {
            self.host = host;
        }
    }

    pub(crate) fn set_api_key(&mut self, key: Option<SecretString>) {
        if !self.pinned.api_key {
            self.api_key = key;
        }
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        if !self.pinned.username {
            self.username = username;
        }
    }

    pub(crate) fn set_alert_limit(&mut self, limit: Option<i64>) {
        if !self.pinned.alert_limit {
            self.alert_limit = limit;
        }
    }

    pub(crate) fn set_log_enable(&mut self, enable: Option<bool>) {
        self.log_enable = enable;
    }

    pub(crate) fn set_log_file(&mut self, file: Option<PathBuf>) {
        self.log_file = file;
    }

    /// Resolve the settings file path: builder value, then `TYGENIE_CONFIG_PATH`,
    /// then the platform default.
    pub fn resolve_config_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.config_path {
            return Ok(path.clone());
        }
        if let Some(path) = config_path_from_env() {
            return Ok(path);
        }
        default_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))
    }

    /// Read the settings file, if it exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigFileRead`/`ConfigFileParse` when the file exists but
    /// cannot be read or parsed.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        let path = self.resolve_config_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "Settings file not found, using defaults");
            return Ok(self);
        }

        self.file_settings = Some(read_settings_file(&path)?);
        Ok(self)
    }

    /// Apply environment variable overrides.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Normalize a base URL by removing trailing slashes.
    fn normalize_host(host: &str) -> String {
        host.trim().trim_end_matches('/').to_string()
    }

    /// Build the final settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a non-empty host is not a valid URL.
    pub fn build(self) -> Result<Settings, ConfigError> {
        let mut settings = self.file_settings.unwrap_or_default();

        if let Some(host) = self.host {
            settings.opsgenie.host = host;
        }
        if let Some(key) = self.api_key {
            settings.opsgenie.api_key = key;
        }
        if let Some(username) = self.username {
            settings.opsgenie.username = username;
        }
        if let Some(limit) = self.alert_limit {
            settings.tygenie.alerts.limit = Some(limit);
        }
        if let Some(enable) = self.log_enable {
            settings.tygenie.log.enable = enable;
        }
        if let Some(file) = self.log_file {
            settings.tygenie.log.file = file;
        }

        settings.opsgenie.host = Self::normalize_host(&settings.opsgenie.host);
        if !settings.opsgenie.host.is_empty() {
            url::Url::parse(&settings.opsgenie.host).map_err(|e| ConfigError::InvalidValue {
                var: "opsgenie.host".to_string(),
                message: e.to_string(),
            })?;
        }

        Ok(settings)
    }
}
