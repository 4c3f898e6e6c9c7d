//! Builder for constructing [`ApiFacade`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for façade configuration
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (connect and overall timeouts)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`ApiFacade`] methods)
//! - Replacing the façade when credentials change (see [`crate::manager`])
//!
//! # Invariants
//! - The host is never validated here: a façade built from empty credentials
//!   exists and every call on it fails softly.
//! - Timeouts are fixed for the lifetime of the façade.

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;
use tygenie_config::{
    Credentials, Settings,
    constants::{
        DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS, TOOL_NAME,
    },
};

use crate::activity::ActivityLogger;
use crate::client::ApiFacade;
use crate::error::Result;

/// Builder for creating a new [`ApiFacade`].
///
/// # Example
///
/// ```rust,ignore
/// use tygenie_client::ApiFacade;
///
/// let api = ApiFacade::builder()
///     .from_credentials(&settings.credentials())
///     .logger(logger)
///     .build()?;
/// ```
pub struct ApiFacadeBuilder {
    host: String,
    api_key: SecretString,
    username: String,
    timeout: Duration,
    connect_timeout: Duration,
    logger: Option<ActivityLogger>,
}

impl Default for ApiFacadeBuilder {
    fn default() -> Self {
        let empty = Credentials::empty();
        Self {
            host: empty.host,
            api_key: empty.api_key,
            username: empty.username,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            logger: None,
        }
    }
}

impl ApiFacadeBuilder {
    /// Create a new builder with empty credentials and default timeouts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take host, API key, and username from a credential set.
    pub fn from_credentials(mut self, credentials: &Credentials) -> Self {
        self.host = credentials.host.clone();
        self.api_key = credentials.api_key.clone();
        self.username = credentials.username.clone();
        self
    }

    /// Set the Opsgenie base URL, e.g. `https://api.opsgenie.com`.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the API key sent as `Authorization: GenieKey <key>`.
    pub fn api_key(mut self, key: SecretString) -> Self {
        self.api_key = key;
        self
    }

    /// Set the user attached to mutating calls.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Set the overall request timeout. Default is 5 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout. Default is 10 seconds.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the activity logger. Without one, activity logging is disabled.
    pub fn logger(mut self, logger: ActivityLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Audit source string: tool name and crate version.
    pub fn source() -> String {
        format!("{} {}", TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }

    /// Normalize a base URL by removing surrounding whitespace and trailing slashes.
    fn normalize_base_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    /// Build the [`ApiFacade`].
    ///
    /// # Errors
    ///
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<ApiFacade> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .user_agent(Self::source())
            .build()?;

        let logger = self
            .logger
            .unwrap_or_else(|| ActivityLogger::new(Arc::new(Settings::default())));

        Ok(ApiFacade {
            http,
            base_url: Self::normalize_base_url(&self.host),
            api_key: self.api_key,
            username: self.username,
            source: Self::source(),
            timeout: self.timeout,
            logger,
        })
    }
}
