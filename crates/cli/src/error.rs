//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map the cause of an absent API result to an exit code.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs for SIGINT handling).
//!
//! Invariants:
//! - Exit codes 1-8 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use tygenie_client::{Absence, ClientError};

/// Structured exit codes for tygenie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - missing or invalid API key.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or unconfigured host.
    ConnectionError = 3,

    /// Alert not found.
    NotFound = 4,

    /// Validation error - rejected parameters or unreadable response.
    ValidationError = 5,

    /// Permission denied - API key lacks the required access.
    PermissionDenied = 6,

    /// Rate limited - HTTP 429 Too Many Requests.
    RateLimited = 7,

    /// Service unavailable - HTTP 502/503/504.
    ServiceUnavailable = 8,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Timeout(_) | ClientError::InvalidUrl(_) | ClientError::HttpError(_) => {
                ExitCode::ConnectionError
            }
            ClientError::InvalidRequest(_) | ClientError::InvalidResponse(_) => {
                ExitCode::ValidationError
            }
            ClientError::ApiError { status, .. } => match status {
                400 | 422 => ExitCode::ValidationError,
                401 => ExitCode::AuthenticationFailed,
                403 => ExitCode::PermissionDenied,
                404 => ExitCode::NotFound,
                429 => ExitCode::RateLimited,
                502..=504 => ExitCode::ServiceUnavailable,
                _ => ExitCode::GeneralError,
            },
        }
    }
}

/// Extension trait to extract exit codes from anyhow errors.
pub trait ExitCodeExt {
    /// Get the appropriate exit code for this error.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.downcast_ref::<Absence>()
            .map(|absence| ExitCode::from(&absence.cause))
            .unwrap_or(ExitCode::GeneralError)
    }
}
