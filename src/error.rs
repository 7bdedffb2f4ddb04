//! Error types.
//!
//! - `ProviderError`: the two outcomes a lookup can fail with
//! - `AppError`: process-level error carrying the exit code the binary returns

use thiserror::Error;

/// Exit code for bad input or configuration (HTTP 400 equivalent).
pub const EXIT_BAD_REQUEST: u8 = 2;
/// Exit code when the species does not exist upstream (HTTP 404 equivalent).
pub const EXIT_NOT_FOUND: u8 = 3;
/// Exit code when the species provider could not be used (HTTP 503 equivalent).
pub const EXIT_UNAVAILABLE: u8 = 4;

/// Why a species lookup produced no record.
///
/// Only the species fetch raises these. Translation problems never surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("species '{name}' was not found")]
    NotFound { name: String },
    /// Non-404 error status, transport failure, or an unusable payload.
    #[error("species provider unavailable: {reason}")]
    UpstreamUnavailable { reason: String },
}

impl ProviderError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        ProviderError::UpstreamUnavailable {
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NotFound { .. })
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(EXIT_BAD_REQUEST, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        let exit_code = match err {
            ProviderError::NotFound { .. } => EXIT_NOT_FOUND,
            ProviderError::UpstreamUnavailable { .. } => EXIT_UNAVAILABLE,
        };
        Self::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
