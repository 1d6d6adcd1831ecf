//! Shared error type across gctune crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed payload.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, GcTuneError>;

/// Unified error type used by core and gateway.
///
/// The tuning service itself never fails on malformed field values (those are
/// skipped per field, see `tuning::ConfigUpdater`); this surface exists for
/// the gateway config loader and the HTTP boundary.
#[derive(Debug, Error)]
pub enum GcTuneError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl GcTuneError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            GcTuneError::BadRequest(_) => ClientCode::BadRequest,
            GcTuneError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            GcTuneError::Internal(_) => ClientCode::Internal,
        }
    }
}
