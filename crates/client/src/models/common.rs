//! Common types shared across Opsgenie API models.
//!
//! This module contains the envelope fields and shared types used by multiple
//! resource modules. It does NOT contain resource-specific models.

use serde::{Deserialize, Serialize};

/// Pagination links returned by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paging {
    pub first: Option<String>,
    pub next: Option<String>,
    pub prev: Option<String>,
    pub last: Option<String>,
}

/// Response to every asynchronous mutating call (ack, close, tags, notes).
///
/// Opsgenie answers `202 Accepted` and processes the request in the background.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuccessResponse {
    pub result: String,
    pub took: f64,
    pub request_id: String,
}

/// Error body returned by Opsgenie on non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorBody {
    pub message: String,
    pub took: f64,
    pub request_id: Option<String>,
}
