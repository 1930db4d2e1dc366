//! Password-based authenticated encryption of stored values.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use serde::{Deserialize, Serialize};

use super::blob::{EncryptedBlob, NONCE_LENGTH, SALT_LENGTH};
use super::key::{derive_key, DerivedKey};
use crate::error::{FinvaultError, Result};

/// A password-based cipher for values kept in key/value storage.
///
/// Implementations are stateless.
pub trait BlobCipher: Send + Sync {
    /// Short identifier used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Whether the cipher provides confidentiality and integrity.
    fn is_secure(&self) -> bool;

    /// Encrypt `plaintext` under `password` into a storable string.
    fn encrypt(&self, plaintext: &[u8], password: &str) -> Result<String>;

    /// Recover the plaintext from a string produced by [`encrypt`](Self::encrypt).
    fn decrypt(&self, encoded: &str, password: &str) -> Result<Vec<u8>>;
}

/// PBKDF2-HMAC-SHA256 + AES-256-GCM with a fresh salt and nonce per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct SecureCipher;

impl SecureCipher {
    pub fn new() -> Self {
        Self
    }

    fn aead(key: &DerivedKey) -> Result<Aes256Gcm> {
        Aes256Gcm::new_from_slice(key.as_bytes())
            .map_err(|e| FinvaultError::CryptoUnavailable(format!("AES-GCM setup failed: {}", e)))
    }
}

impl BlobCipher for SecureCipher {
    fn name(&self) -> &'static str {
        "pbkdf2-sha256/aes-256-gcm"
    }

    fn is_secure(&self) -> bool {
        true
    }

    fn encrypt(&self, plaintext: &[u8], password: &str) -> Result<String> {
        let mut salt = [0u8; SALT_LENGTH];
        let mut nonce = [0u8; NONCE_LENGTH];
        fill_random(&mut salt)?;
        fill_random(&mut nonce)?;

        let key = derive_key(password, &salt)?;
        let ciphertext = Self::aead(&key)?
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|_| FinvaultError::CryptoUnavailable("AES-GCM encryption failed".to_string()))?;

        let blob = EncryptedBlob {
            salt,
            nonce,
            ciphertext,
        };
        tracing::debug!(
            plaintext_len = plaintext.len(),
            blob_len = blob.ciphertext.len() + SALT_LENGTH + NONCE_LENGTH,
            "encrypted value"
        );
        Ok(blob.to_hex())
    }

    fn decrypt(&self, encoded: &str, password: &str) -> Result<Vec<u8>> {
        let blob = EncryptedBlob::parse(encoded)?;
        let key = derive_key(password, &blob.salt)?;

        Self::aead(&key)?
            .decrypt(Nonce::from_slice(&blob.nonce), blob.ciphertext.as_slice())
            .map_err(|_| {
                tracing::debug!("authentication tag did not verify");
                FinvaultError::AuthenticationFailed
            })
    }
}

fn fill_random(buf: &mut [u8]) -> Result<()> {
    getrandom::getrandom(buf)
        .map_err(|e| FinvaultError::CryptoUnavailable(format!("OS randomness unavailable: {}", e)))
}

/// Which cipher a deployment uses.
///
/// `InsecureFallback` must be chosen explicitly; it is never a default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherMode {
    #[default]
    Secure,
    InsecureFallback,
}

impl CipherMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CipherMode::Secure => "secure",
            CipherMode::InsecureFallback => "insecure_fallback",
        }
    }
}

/// Build the cipher for `mode`.
///
/// # Errors
///
/// Returns `FinvaultError::CryptoUnavailable` when `InsecureFallback` is
/// requested but the `insecure-fallback` feature was not compiled in.
pub fn cipher_for_mode(mode: CipherMode) -> Result<Box<dyn BlobCipher>> {
    match mode {
        CipherMode::Secure => Ok(Box::new(SecureCipher::new())),
        #[cfg(feature = "insecure-fallback")]
        CipherMode::InsecureFallback => {
            tracing::warn!("insecure fallback cipher selected; stored values are NOT encrypted");
            Ok(Box::new(super::fallback::InsecureEncoding::new()))
        }
        #[cfg(not(feature = "insecure-fallback"))]
        CipherMode::InsecureFallback => Err(FinvaultError::CryptoUnavailable(
            "insecure fallback requested but this build does not include it".to_string(),
        )),
    }
}

/// Encrypt a UTF-8 string with the secure cipher.
///
/// # Examples
///
/// ```
/// use finvault_core::crypto::{decrypt, encrypt};
///
/// let blob = encrypt("balance:1000.00", "correct-pw").unwrap();
/// assert_eq!(decrypt(&blob, "correct-pw").unwrap(), "balance:1000.00");
/// assert!(decrypt(&blob, "wrong-pw").is_err());
/// ```
pub fn encrypt(plaintext: &str, password: &str) -> Result<String> {
    SecureCipher.encrypt(plaintext.as_bytes(), password)
}

/// Decrypt a blob produced by [`encrypt`] back into a string.
///
/// # Errors
///
/// Returns `FinvaultError::AuthenticationFailed` if the password is wrong or
/// the blob is corrupted, and `FinvaultError::Validation` if the authenticated
/// plaintext is not UTF-8.
pub fn decrypt(blob: &str, password: &str) -> Result<String> {
    let bytes = SecureCipher.decrypt(blob, password)?;
    String::from_utf8(bytes)
        .map_err(|_| FinvaultError::Validation("Decrypted value is not UTF-8".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::blob::MIN_BLOB_LENGTH;

    #[test]
    fn test_round_trip() {
        let blob = encrypt("balance:1000.00", "correct-pw").unwrap();
        assert_eq!(decrypt(&blob, "correct-pw").unwrap(), "balance:1000.00");
    }

    #[test]
    fn test_wrong_password_is_authentication_failure() {
        let blob = encrypt("balance:1000.00", "correct-pw").unwrap();
        let result = decrypt(&blob, "wrong-pw");
        assert!(matches!(result, Err(FinvaultError::AuthenticationFailed)));
    }

    #[test]
    fn test_fresh_salt_and_nonce_per_call() {
        let first = encrypt("same", "same-password").unwrap();
        let second = encrypt("same", "same-password").unwrap();

        assert_ne!(first, second);
        // Salt and nonce both differ, not just one of them.
        assert_ne!(&first[..2 * SALT_LENGTH], &second[..2 * SALT_LENGTH]);
        assert_ne!(
            &first[2 * SALT_LENGTH..2 * (SALT_LENGTH + NONCE_LENGTH)],
            &second[2 * SALT_LENGTH..2 * (SALT_LENGTH + NONCE_LENGTH)]
        );
        assert_eq!(decrypt(&first, "same-password").unwrap(), "same");
        assert_eq!(decrypt(&second, "same-password").unwrap(), "same");
    }

    #[test]
    fn test_blob_length_matches_layout() {
        let blob = encrypt("abcd", "password-123").unwrap();
        assert_eq!(blob.len(), 2 * (MIN_BLOB_LENGTH + 4));
        assert!(blob.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_tampered_ciphertext_rejected() {
        let blob = encrypt("balance:1000.00", "correct-pw").unwrap();
        let mut bytes = hex::decode(&blob).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;

        let result = decrypt(&hex::encode(bytes), "correct-pw");
        assert!(matches!(result, Err(FinvaultError::AuthenticationFailed)));
    }

    #[test]
    fn test_tampered_salt_rejected() {
        let blob = encrypt("balance:1000.00", "correct-pw").unwrap();
        let mut bytes = hex::decode(&blob).unwrap();
        bytes[0] ^= 0x80;

        let result = decrypt(&hex::encode(bytes), "correct-pw");
        assert!(matches!(result, Err(FinvaultError::AuthenticationFailed)));
    }

    #[test]
    fn test_empty_plaintext() {
        let blob = encrypt("", "password-123").unwrap();
        assert_eq!(blob.len(), 2 * MIN_BLOB_LENGTH);
        assert_eq!(decrypt(&blob, "password-123").unwrap(), "");
    }

    #[test]
    fn test_non_utf8_plaintext_is_validation_error() {
        let blob = SecureCipher.encrypt(&[0xff, 0xfe], "password-123").unwrap();
        assert_eq!(
            SecureCipher.decrypt(&blob, "password-123").unwrap(),
            vec![0xff, 0xfe]
        );
        assert!(matches!(
            decrypt(&blob, "password-123"),
            Err(FinvaultError::Validation(_))
        ));
    }

    #[test]
    fn test_secure_mode_is_default() {
        assert_eq!(CipherMode::default(), CipherMode::Secure);
        let cipher = cipher_for_mode(CipherMode::Secure).unwrap();
        assert!(cipher.is_secure());
    }

    #[cfg(not(feature = "insecure-fallback"))]
    #[test]
    fn test_fallback_unavailable_without_feature() {
        let result = cipher_for_mode(CipherMode::InsecureFallback);
        assert!(matches!(result, Err(FinvaultError::CryptoUnavailable(_))));
    }
}
