//! Error types for finvault core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for finvault operations.
pub type Result<T> = std::result::Result<T, FinvaultError>;

/// Core error type for finvault operations.
#[derive(Debug, Error)]
pub enum FinvaultError {
    /// The platform cannot provide a required cryptographic primitive
    /// (OS randomness, cipher setup, or a cipher mode that was not compiled in).
    #[error("Cryptography unavailable: {0}")]
    CryptoUnavailable(String),

    /// Wrong password or corrupted ciphertext.
    #[error("Authentication failed: wrong password or corrupted data")]
    AuthenticationFailed,

    /// Invalid caller input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),
}

impl FinvaultError {
    /// True for failures that a fresh password prompt could fix.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, FinvaultError::AuthenticationFailed)
    }
}

impl From<std::io::Error> for FinvaultError {
    fn from(err: std::io::Error) -> Self {
        FinvaultError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for FinvaultError {
    fn from(err: serde_json::Error) -> Self {
        FinvaultError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds_are_distinguishable() {
        let unavailable = FinvaultError::CryptoUnavailable("no rng".to_string());
        let auth = FinvaultError::AuthenticationFailed;

        assert!(!unavailable.is_auth_failure());
        assert!(auth.is_auth_failure());
        assert!(unavailable.to_string().contains("no rng"));
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let err: FinvaultError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, FinvaultError::Storage(_)));
    }
}
