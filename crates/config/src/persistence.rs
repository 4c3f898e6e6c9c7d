//! Settings file persistence.
//!
//! Responsibilities:
//! - Determine the platform configuration file path.
//! - Read and parse the JSON settings file.
//! - Write the settings file atomically (temp file + rename).
//!
//! Does NOT handle:
//! - Merging file values with the environment (see `loader`).
//! - Direct REST API communication (see `crates/client`).
//!
//! Invariants:
//! - A partially written settings file is never observed by readers.
//! - The API key is stored as plain text; the settings file is the credential store.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::loader::ConfigError;
use crate::types::Settings;

/// Returns the default path to the settings file.
///
/// - Linux/macOS: `~/.config/tygenie/config.json`
/// - Windows: `%AppData%\tygenie\config.json`
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_DIR_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Read and parse a settings file.
///
/// # Errors
///
/// `ConfigFileRead` if the file cannot be read, `ConfigFileParse` if it is not
/// a valid settings document.
pub fn read_settings_file(path: &Path) -> Result<Settings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "Settings file read failed");
        ConfigError::ConfigFileRead {
            path: path.to_path_buf(),
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Settings file is not valid JSON");
        ConfigError::ConfigFileParse {
            path: path.to_path_buf(),
        }
    })
}

/// Write a settings file atomically, creating parent directories as needed.
///
/// # Errors
///
/// `ConfigFileWrite` if the directory, temp file, or rename fails.
pub fn write_settings_file(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
    let write_err = |e: std::io::Error| {
        tracing::warn!(path = %path.display(), error = %e, "Settings file write failed");
        ConfigError::ConfigFileWrite {
            path: path.to_path_buf(),
        }
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let content = serde_json::to_string_pretty(settings).map_err(|e| {
        tracing::warn!(error = %e, "Settings serialization failed");
        ConfigError::ConfigFileWrite {
            path: path.to_path_buf(),
        }
    })?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, content).map_err(write_err)?;
    std::fs::rename(&tmp_path, path).map_err(write_err)?;

    Ok(())
}
