//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells and clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (config, store key).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong password or corrupted blob).
    pub const AUTH_FAILED: i32 = 5;

    /// The requested cipher cannot run on this build or host.
    pub const CRYPTO_UNAVAILABLE: i32 = 6;
}

/// Environment variable holding the password for non-interactive use.
pub const PASSWORD_ENV: &str = "FINVAULT_PASSWORD";

/// Environment variable overriding the config file path.
pub const CONFIG_ENV: &str = "FINVAULT_CONFIG";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "FINVAULT_LOG";
