//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use finvault_core::FinvaultError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, store key)
    NotFound { message: String, hint: String },

    /// Authentication failed (wrong password, corrupted blob)
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput(String),

    /// Cipher cannot run
    CryptoUnavailable(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::AuthFailed { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::CryptoUnavailable(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::CryptoUnavailable(_) => exit_codes::CRYPTO_UNAVAILABLE,
        }
    }
}

/// Exit code for an error bubbled up to `main`.
///
/// Core errors anywhere in the chain keep their specific code.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli) = err.downcast_ref::<CliError>() {
        return cli.exit_code();
    }
    err.chain()
        .find_map(|cause| cause.downcast_ref::<FinvaultError>())
        .map(core_exit_code)
        .unwrap_or(1)
}

/// Hint printed under the error message, if the error has one.
pub fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    let core = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<FinvaultError>())?;
    match core {
        FinvaultError::AuthenticationFailed => {
            Some("Hint: values only open with the password they were written with.")
        }
        FinvaultError::NotFound(_) => Some("Hint: run `finvault store list` to see stored keys."),
        FinvaultError::CryptoUnavailable(_) => Some(
            "Hint: set [security] cipher = \"secure\" or rebuild with --features insecure-fallback.",
        ),
        _ => None,
    }
}

fn core_exit_code(err: &FinvaultError) -> i32 {
    use super::constants::exit_codes;
    match err {
        FinvaultError::AuthenticationFailed => exit_codes::AUTH_FAILED,
        FinvaultError::CryptoUnavailable(_) => exit_codes::CRYPTO_UNAVAILABLE,
        FinvaultError::InvalidInput(_) | FinvaultError::Validation(_) => exit_codes::INVALID_INPUT,
        FinvaultError::NotFound(_) => exit_codes::NOT_FOUND,
        FinvaultError::Storage(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;

    #[test]
    fn test_core_errors_map_to_exit_codes() {
        let auth: anyhow::Error = FinvaultError::AuthenticationFailed.into();
        assert_eq!(exit_code_for(&auth), exit_codes::AUTH_FAILED);

        let unavailable: anyhow::Error = FinvaultError::CryptoUnavailable("x".into()).into();
        assert_eq!(exit_code_for(&unavailable), exit_codes::CRYPTO_UNAVAILABLE);

        let invalid: anyhow::Error = FinvaultError::InvalidInput("x".into()).into();
        assert_eq!(exit_code_for(&invalid), exit_codes::INVALID_INPUT);

        let missing: anyhow::Error = FinvaultError::NotFound("x".into()).into();
        assert_eq!(exit_code_for(&missing), exit_codes::NOT_FOUND);
        assert!(hint_for(&missing).is_some());

        let storage: anyhow::Error = FinvaultError::Storage("x".into()).into();
        assert_eq!(exit_code_for(&storage), 1);
    }

    #[test]
    fn test_context_does_not_hide_core_error() {
        let err = anyhow::Error::from(FinvaultError::AuthenticationFailed).context("reading key");
        assert_eq!(exit_code_for(&err), exit_codes::AUTH_FAILED);
    }

    #[test]
    fn test_auth_failure_has_hint() {
        let err: anyhow::Error = FinvaultError::AuthenticationFailed.into();
        assert!(hint_for(&err).is_some());
        let other: anyhow::Error = FinvaultError::Storage("x".into()).into();
        assert!(hint_for(&other).is_none());
    }

    #[test]
    fn test_cli_error_passes_through() {
        let err: anyhow::Error = CliError::not_found("missing", "hint").into();
        assert_eq!(exit_code_for(&err), exit_codes::NOT_FOUND);
    }
}
