//! Configuration types for TyGenie.
//!
//! Responsibilities:
//! - Define the settings document shape (`opsgenie` credentials, `tygenie` preferences).
//! - Provide lookup helpers for named filters and the effective alert page size.
//!
//! Does NOT handle:
//! - Reading settings from disk or the environment (see `loader`).
//! - Sharing or hot-reloading settings (see `provider`).
//!
//! Invariants:
//! - Every section is optional in the JSON document; missing sections take defaults.
//! - The API key never appears in `Debug` output.

use std::collections::BTreeMap;
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ALERT_LIMIT, DEFAULT_LOG_FILE};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Root settings document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Opsgenie account credentials.
    pub opsgenie: OpsgenieSettings,
    /// Client preferences: logging, paging and filters.
    pub tygenie: TygenieSettings,
}

impl Settings {
    /// Credentials used to build an authenticated API client.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            api_key: self.opsgenie.api_key.clone(),
            host: self.opsgenie.host.clone(),
            username: self.opsgenie.username.clone(),
        }
    }
}

/// The `opsgenie` section of the settings document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpsgenieSettings {
    /// Opsgenie user the client acts as (attached to audit payloads).
    pub username: String,
    /// Base URL of the Opsgenie API, e.g. `https://api.opsgenie.com`.
    pub host: String,
    /// Integration API key.
    #[serde(with = "secret_string")]
    pub api_key: SecretString,
}

impl Default for OpsgenieSettings {
    fn default() -> Self {
        Self {
            username: String::new(),
            host: String::new(),
            api_key: SecretString::new(String::new().into()),
        }
    }
}

/// Credentials consumed by the API client.
///
/// May be empty before the first successful load; an empty set still builds a
/// client whose calls fail softly.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: SecretString,
    pub host: String,
    pub username: String,
}

impl Credentials {
    /// Credentials with every field empty.
    pub fn empty() -> Self {
        Self {
            api_key: SecretString::new(String::new().into()),
            host: String::new(),
            username: String::new(),
        }
    }

    /// True when both host and API key are present.
    pub fn is_configured(&self) -> bool {
        !self.host.trim().is_empty() && !self.api_key.expose_secret().trim().is_empty()
    }
}

/// The `tygenie` section of the settings document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TygenieSettings {
    pub log: LogSettings,
    pub alerts: AlertSettings,
    /// Filter used when no filter has been selected yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_filter: Option<String>,
    /// Named filters, keyed by display name.
    pub filters: BTreeMap<String, FilterDefinition>,
}

impl TygenieSettings {
    /// Query string of the named filter, if it is configured.
    pub fn filter_query(&self, name: &str) -> Option<&str> {
        self.filters.get(name).map(|f| f.filter.as_str())
    }
}

/// Activity log preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Activity logging is off unless explicitly enabled.
    pub enable: bool,
    /// File the activity log appends to.
    pub file: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            enable: false,
            file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Alert list preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertSettings {
    /// Page size. Zero or negative values are treated as unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl AlertSettings {
    /// Page size in effect: the configured value when positive, otherwise the default.
    pub fn effective_limit(&self) -> u32 {
        self.limit
            .filter(|l| *l > 0)
            .map(|l| u32::try_from(l).unwrap_or(u32::MAX))
            .unwrap_or(DEFAULT_ALERT_LIMIT)
    }
}

/// A named, pre-configured alert query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterDefinition {
    /// Opsgenie search query, e.g. `status:open AND tag:prod`.
    pub filter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FilterDefinition {
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            description: None,
        }
    }
}
