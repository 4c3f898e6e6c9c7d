//! Centralized constants for the TyGenie workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Overall request timeout in seconds for every Opsgenie call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Connect timeout in seconds for every Opsgenie call.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Authorization scheme prefix expected by Opsgenie (`Authorization: GenieKey <key>`).
pub const API_KEY_PREFIX: &str = "GenieKey";

/// Tool name attached to every mutating call as the audit `source`.
pub const TOOL_NAME: &str = "TyGenie";

// =============================================================================
// Alert Pagination Defaults
// =============================================================================

/// Page size used by the pagination engine when the configuration has none.
pub const DEFAULT_ALERT_LIMIT: u32 = 22;

/// Page size used by a bare `list_alerts` call.
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// Sort field used by a bare `list_alerts` call.
pub const DEFAULT_LIST_SORT: &str = "updatedAt";

/// Sort field used by the pagination engine.
pub const DEFAULT_QUERY_SORT: &str = "createdAt";

// =============================================================================
// Activity Log Defaults
// =============================================================================

/// File the activity log appends to when none is configured.
pub const DEFAULT_LOG_FILE: &str = "/tmp/tygenie.log";

/// Application directory name used for the settings file location.
pub const APP_DIR_NAME: &str = "tygenie";

/// Settings file name inside the application config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";
