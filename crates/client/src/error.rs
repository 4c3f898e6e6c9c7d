//! Error types for the Opsgenie client.
//!
//! Invariants:
//! - `ClientError` describes why a single remote call failed.
//! - `Absence` is the only failure value the façade hands back; it pairs the
//!   failed operation with its cause so callers can assert on it without
//!   scraping the activity log.

use std::time::Duration;
use thiserror::Error;

use crate::operation::OperationKind;

/// Result type alias for internal client steps.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Result of a façade call: the parsed payload, or an [`Absence`].
pub type ApiResult<T> = std::result::Result<T, Absence>;

/// Errors that can occur during a single Opsgenie call.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connect failure, TLS, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from Opsgenie.
    #[error("API error ({status}) at {url}: {message}{}", .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        message: String,
        request_id: Option<String>,
    },

    /// The request could not be built (e.g. body serialization failed).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid response format from Opsgenie.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Invalid URL (usually an unconfigured or malformed host).
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status == 401 || *status == 403)
    }

    /// HTTP status of the failed call, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// The no-result outcome of a failed façade call.
#[derive(Error, Debug)]
#[error("{operation} returned no result: {cause}")]
pub struct Absence {
    /// Operation that failed.
    pub operation: OperationKind,
    /// Why it failed.
    #[source]
    pub cause: ClientError,
}

impl Absence {
    pub fn new(operation: OperationKind, cause: ClientError) -> Self {
        Self { operation, cause }
    }

    /// True when the call hit the configured timeout.
    pub fn is_timeout(&self) -> bool {
        match &self.cause {
            ClientError::Timeout(_) => true,
            ClientError::HttpError(e) => e.is_timeout(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_includes_request_id() {
        let err = ClientError::ApiError {
            status: 404,
            url: "https://api.opsgenie.com/v2/alerts/x".to_string(),
            message: "Alert does not exist".to_string(),
            request_id: Some("req-1".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("Alert does not exist"));
        assert!(msg.contains("[Request ID: req-1]"));
    }

    #[test]
    fn test_is_auth_error() {
        let err = ClientError::ApiError {
            status: 401,
            url: String::new(),
            message: String::new(),
            request_id: None,
        };
        assert!(err.is_auth_error());
        assert_eq!(err.status(), Some(401));

        let err = ClientError::Timeout(Duration::from_secs(5));
        assert!(!err.is_auth_error());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_absence_display_names_operation() {
        let absence = Absence::new(
            OperationKind::ListAlerts,
            ClientError::InvalidUrl("host is empty".to_string()),
        );
        assert_eq!(
            absence.to_string(),
            "list_alerts returned no result: Invalid URL: host is empty"
        );
        assert!(!absence.is_timeout());
        assert!(Absence::new(
            OperationKind::CountAlerts,
            ClientError::Timeout(Duration::from_secs(5))
        )
        .is_timeout());
    }
}
