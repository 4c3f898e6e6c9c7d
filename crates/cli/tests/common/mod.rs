//! Shared test utilities for tygenie CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Point the settings file at a private temp location so the host's own
//!   `config.json` is never read.
//!
//! Invariants / Assumptions:
//! - `OPSGENIE_API_KEY` is set to "test-genie-key" unless overridden.
//! - `OPSGENIE_HOST` is unset; tests pass the mock server URI explicitly.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

#[allow(unused_imports)]
pub use tygenie_client::testing::load_fixture;

/// API key every hermetic command sends.
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-genie-key";

/// Username every hermetic command attaches to mutating calls.
#[allow(dead_code)]
pub const TEST_USER: &str = "jdoe@example.com";

/// A settings file location inside a fresh temp directory.
///
/// The file itself is not created; hold on to the `TempDir` for the
/// duration of the test.
#[allow(dead_code)]
pub fn temp_config_path() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config.json");
    (dir, path)
}

/// Write a settings document and return its location.
#[allow(dead_code)]
pub fn write_config(dir: &Path, settings: &serde_json::Value) -> PathBuf {
    let path = dir.join("config.json");
    std::fs::write(&path, serde_json::to_string_pretty(settings).expect("serialize"))
        .expect("write settings file");
    path
}

/// Returns a hermetic `tygenie` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Opsgenie and TyGenie variables from the host are cleared.
/// - `TYGENIE_CONFIG_PATH` points at `config_path`.
#[allow(dead_code)]
pub fn tygenie_cmd_with_config(config_path: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("tygenie");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("OPSGENIE_HOST")
        .env_remove("OPSGENIE_USERNAME")
        .env_remove("TYGENIE_ALERTS_LIMIT")
        .env_remove("TYGENIE_LOG_ENABLE")
        .env_remove("TYGENIE_LOG_FILE")
        .env_remove("RUST_LOG");

    cmd.env("OPSGENIE_API_KEY", TEST_API_KEY)
        .env("OPSGENIE_USERNAME", TEST_USER)
        .env("TYGENIE_CONFIG_PATH", config_path);

    cmd
}

/// Returns a hermetic `tygenie` command talking to `host`.
///
/// The returned `TempDir` backs an empty settings location and must outlive
/// the command.
#[allow(dead_code)]
pub fn tygenie_cmd(host: &str) -> (TempDir, Command) {
    let (dir, path) = temp_config_path();
    let mut cmd = tygenie_cmd_with_config(&path);
    cmd.env("OPSGENIE_HOST", host);
    (dir, cmd)
}
