//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Opsgenie client. All integration tests should use
//! these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

use std::path::Path;
use std::sync::Arc;

use secrecy::SecretString;

// Re-export test utilities from tygenie-client
#[allow(unused_imports)]
pub use tygenie_client::testing::load_fixture;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use tygenie_client::{ActivityLogger, AlertRef, ApiFacade};
#[allow(unused_imports)]
pub use tygenie_config::{Settings, SettingsProvider};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// API key used by every test façade.
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-genie-key";

/// User attached to mutating calls by every test façade.
#[allow(dead_code)]
pub const TEST_USER: &str = "jdoe@example.com";

/// Build a façade pointed at a mock server with activity logging disabled.
#[allow(dead_code)]
pub fn facade(uri: &str) -> ApiFacade {
    ApiFacade::builder()
        .host(uri)
        .api_key(SecretString::new(TEST_API_KEY.to_string().into()))
        .username(TEST_USER)
        .build()
        .expect("façade should build")
}

/// Settings pointed at a mock server, with activity logging written to `log_file`.
#[allow(dead_code)]
pub fn settings_for(uri: &str, log_file: &Path) -> Settings {
    let mut settings = Settings::default();
    settings.opsgenie.host = uri.to_string();
    settings.opsgenie.api_key = SecretString::new(TEST_API_KEY.to_string().into());
    settings.opsgenie.username = TEST_USER.to_string();
    settings.tygenie.log.enable = true;
    settings.tygenie.log.file = log_file.to_path_buf();
    settings
}

/// Build a façade that logs activity according to `settings`.
#[allow(dead_code)]
pub fn logging_facade(settings: Settings) -> ApiFacade {
    let credentials = settings.credentials();
    let provider: Arc<dyn SettingsProvider> = Arc::new(settings);
    ApiFacade::builder()
        .from_credentials(&credentials)
        .logger(ActivityLogger::new(provider))
        .build()
        .expect("façade should build")
}
