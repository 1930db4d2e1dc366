//! Password validation for values the user is about to encrypt.
//!
//! Decryption never validates: a stored blob must open with whatever
//! password it was written with.

use crate::error::{FinvaultError, Result};

/// Minimum password length in characters.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate a new password meets minimum requirements.
///
/// # Requirements
///
/// - Not empty or only whitespace
/// - At least 8 characters long
///
/// # Examples
///
/// ```
/// use finvault_core::crypto::validate_password;
///
/// assert!(validate_password("correct-horse-battery").is_ok());
/// assert!(validate_password("short").is_err());
/// ```
pub fn validate_password(password: &str) -> Result<()> {
    if password.trim().is_empty() {
        return Err(FinvaultError::InvalidInput(
            "Password cannot be empty".to_string(),
        ));
    }

    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(FinvaultError::InvalidInput(format!(
            "Password must be at least {} characters (got {})",
            MIN_PASSWORD_LENGTH, length
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("my-secure-password-123").is_ok());
        assert!(validate_password("longer password with spaces!@#").is_ok());
    }

    #[test]
    fn test_password_too_short() {
        let result = validate_password("short");
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("at least 8 characters"));
    }

    #[test]
    fn test_password_empty() {
        assert!(validate_password("").is_err());
        assert!(validate_password("   ").is_err());
        assert!(validate_password("\n\t").is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 4 characters, 8 bytes
        assert!(validate_password("ééèè").is_err());
        assert!(validate_password("12345678").is_ok());
    }
}
