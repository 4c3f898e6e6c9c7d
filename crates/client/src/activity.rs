//! Activity log for API traffic and pagination diagnostics.
//!
//! Responsibilities:
//! - Append timestamped lines to the configured activity log file.
//! - Mirror every line on the `tracing` diagnostic sink (target `tygenie::activity`).
//!
//! Does NOT handle:
//! - Subscriber setup (the binary installs `tracing-subscriber`).
//! - Log rotation.
//!
//! Invariants:
//! - `log()` never fails and never panics; file errors only reach the diagnostic sink.
//! - The enable flag and file path are read from the live settings on every call.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use chrono::Local;
use tygenie_config::SettingsProvider;

/// Timestamped, config-gated activity logger.
#[derive(Clone)]
pub struct ActivityLogger {
    settings: Arc<dyn SettingsProvider>,
}

impl std::fmt::Debug for ActivityLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityLogger").finish_non_exhaustive()
    }
}

impl ActivityLogger {
    pub fn new(settings: Arc<dyn SettingsProvider>) -> Self {
        Self { settings }
    }

    /// Whether logging is currently enabled in the settings.
    pub fn is_enabled(&self) -> bool {
        self.settings.settings().tygenie.log.enable
    }

    /// Record one activity line.
    ///
    /// Empty messages and disabled logging are no-ops.
    pub fn log(&self, message: &str) {
        if message.is_empty() {
            return;
        }

        let settings = self.settings.settings();
        let log = &settings.tygenie.log;
        if !log.enable {
            return;
        }

        let line = format!("[{}] {}", Local::now().to_rfc3339(), message);
        tracing::debug!(target: "tygenie::activity", "{line}");

        if let Err(e) = append_line(&log.file, &line) {
            tracing::warn!(
                target: "tygenie::activity",
                path = %log.file.display(),
                "Unable to log in file: {e}"
            );
        }
    }
}

fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")
}
