//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse environment variables for TyGenie configuration.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Environment variables take precedence over settings file values.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::path::PathBuf;

use super::builder::ConfigLoader;
use super::error::ConfigError;

pub(crate) const ENV_CONFIG_PATH: &str = "TYGENIE_CONFIG_PATH";
pub(crate) const ENV_HOST: &str = "OPSGENIE_HOST";
pub(crate) const ENV_API_KEY: &str = "OPSGENIE_API_KEY";
pub(crate) const ENV_USERNAME: &str = "OPSGENIE_USERNAME";
pub(crate) const ENV_ALERTS_LIMIT: &str = "TYGENIE_ALERTS_LIMIT";
pub(crate) const ENV_LOG_ENABLE: &str = "TYGENIE_LOG_ENABLE";
pub(crate) const ENV_LOG_FILE: &str = "TYGENIE_LOG_FILE";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Settings file path named by `TYGENIE_CONFIG_PATH`, if set.
pub(crate) fn config_path_from_env() -> Option<PathBuf> {
    env_var_or_none(ENV_CONFIG_PATH).map(PathBuf::from)
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

/// Apply environment variable configuration to the loader.
///
/// Environment variables take precedence over settings file values.
pub(crate) fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(host) = env_var_or_none(ENV_HOST) {
        loader.set_host(Some(host));
    }
    if let Some(key) = env_var_or_none(ENV_API_KEY) {
        loader.set_api_key(Some(SecretString::new(key.into())));
    }
    if let Some(username) = env_var_or_none(ENV_USERNAME) {
        loader.set_username(Some(username));
    }
    if let Some(limit) = env_var_or_none(ENV_ALERTS_LIMIT) {
        let value: i64 = limit.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_ALERTS_LIMIT.to_string(),
            message: "must be an integer".to_string(),
        })?;
        loader.set_alert_limit(Some(value));
    }
    if let Some(enable) = env_var_or_none(ENV_LOG_ENABLE) {
        loader.set_log_enable(Some(parse_bool(ENV_LOG_ENABLE, &enable)?));
    }
    if let Some(file) = env_var_or_none(ENV_LOG_FILE) {
        loader.set_log_file(Some(PathBuf::from(file)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_blank_values() {
        temp_env::with_vars(
            [
                ("TYGENIE_TEST_BLANK", Some("   ")),
                ("TYGENIE_TEST_PADDED", Some("  value  ")),
            ],
            || {
                assert_eq!(env_var_or_none("TYGENIE_TEST_BLANK"), None);
                assert_eq!(
                    env_var_or_none("TYGENIE_TEST_PADDED"),
                    Some("value".to_string())
                );
                assert_eq!(env_var_or_none("TYGENIE_TEST_UNSET_VARIABLE"), None);
            },
        );
    }

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        assert!(parse_bool("X", "TRUE").unwrap());
        assert!(parse_bool("X", "1").unwrap());
        assert!(!parse_bool("X", "off").unwrap());
        assert!(matches!(
            parse_bool("X", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
