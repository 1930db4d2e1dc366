//! Input and parsing helper functions for the CLI.

use std::io::{self, IsTerminal, Read};

use chrono::{NaiveDate, Utc};
use dialoguer::Password;
use secrecy::{ExposeSecret, SecretString};

use finvault_core::crypto::validate_password;

use crate::constants::PASSWORD_ENV;
use crate::errors::CliError;

/// Password from `FINVAULT_PASSWORD`, if set and non-blank.
pub fn env_password() -> Option<SecretString> {
    std::env::var(PASSWORD_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(SecretString::from)
}

/// Prompt for a password to open an existing value, or read it from the env.
pub fn prompt_password(interactive: bool) -> anyhow::Result<SecretString> {
    if let Some(password) = env_password() {
        return Ok(password);
    }
    if !interactive {
        return Err(CliError::invalid_input(format!(
            "No password provided and no TTY available. Set {}.",
            PASSWORD_ENV
        ))
        .into());
    }
    Password::new()
        .with_prompt("Password")
        .interact()
        .map(SecretString::from)
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Prompt for a new password with confirmation, or read it from the env.
/// Either way it must pass [`validate_password`].
pub fn prompt_new_password(interactive: bool) -> anyhow::Result<SecretString> {
    let password = match env_password() {
        Some(password) => password,
        None if interactive => Password::new()
            .with_prompt("New password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map(SecretString::from)
            .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?,
        None => {
            return Err(CliError::invalid_input(format!(
                "No password provided and no TTY available. Set {}.",
                PASSWORD_ENV
            ))
            .into())
        }
    };
    validate_password(password.expose_secret())?;
    Ok(password)
}

/// Whether prompts may be shown.
pub fn is_interactive(no_input: bool) -> bool {
    io::stdin().is_terminal() && !no_input
}

/// Use `value` if given, otherwise read all of stdin with one trailing
/// newline removed.
pub fn value_or_stdin(value: Option<String>, what: &str) -> anyhow::Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    if io::stdin().is_terminal() {
        return Err(CliError::invalid_input(format!(
            "No {} provided. Pass it as an argument or pipe it on stdin.",
            what
        ))
        .into());
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(strip_trailing_newline(buffer))
}

fn strip_trailing_newline(mut value: String) -> String {
    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }
    value
}

/// Parse a `YYYY-MM-DD` date, defaulting to today (UTC).
pub fn parse_date_or_today(value: Option<&str>) -> anyhow::Result<NaiveDate> {
    match value {
        Some(value) => NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
            anyhow::Error::from(CliError::invalid_input(format!(
                "Invalid date (expected YYYY-MM-DD): {}",
                value
            )))
        }),
        None => Ok(Utc::now().date_naive()),
    }
}
