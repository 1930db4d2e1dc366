//! Password handling with retry logic.

use secrecy::{ExposeSecret, SecretString};

use crate::errors::CliError;
use crate::helpers::{env_password, prompt_password};

const MAX_INTERACTIVE_ATTEMPTS: u32 = 3;

/// Run `attempt` with a password, re-prompting on authentication failure.
///
/// A password from the environment or a non-interactive session gets one
/// attempt; an interactive prompt gets three. Never retries silently.
pub fn with_password_retry<T>(
    interactive: bool,
    mut attempt: impl FnMut(&str) -> finvault_core::Result<T>,
) -> anyhow::Result<T> {
    let from_env = env_password();
    let max_attempts = if interactive && from_env.is_none() {
        MAX_INTERACTIVE_ATTEMPTS
    } else {
        1
    };
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        let prompted: SecretString;
        let password = match from_env.as_ref() {
            Some(password) => password,
            None => {
                prompted = prompt_password(interactive)?;
                &prompted
            }
        };

        match attempt(password.expose_secret()) {
            Ok(value) => return Ok(value),
            Err(err) if err.is_auth_failure() => {
                let remaining = max_attempts.saturating_sub(attempts);
                if remaining == 0 {
                    if max_attempts == 1 {
                        return Err(err.into());
                    }
                    return Err(CliError::auth_failed_with_hint(
                        "Too many failed password attempts.",
                        "Hint: values only open with the password they were written with.",
                    )
                    .into());
                }
                eprintln!(
                    "Incorrect password. {} attempt{} remaining.",
                    remaining,
                    if remaining == 1 { "" } else { "s" }
                );
            }
            Err(err) => return Err(err.into()),
        }
    }
}
