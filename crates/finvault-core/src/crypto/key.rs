//! Key derivation using PBKDF2-HMAC-SHA256.
//!
//! Browser WebCrypto exposes PBKDF2 and not a memory-hard KDF, and stored
//! blobs were written with it, so the same derivation is used here.

use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

use crate::error::{FinvaultError, Result};

/// PBKDF2 iteration count. Changing this breaks every stored blob.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Length of derived key in bytes (32 bytes = AES-256).
pub const KEY_LENGTH: usize = 32;

/// Minimum salt length accepted by [`derive_key`].
pub const MIN_SALT_LENGTH: usize = 16;

/// A cryptographic key derived from a password.
///
/// Key material is zeroized from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate cipher setup.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive an encryption key from a password and salt.
///
/// Same password + salt always produces the same key. Empty passwords are
/// accepted so that blobs written by lenient callers remain readable;
/// interactive surfaces should run [`validate_password`](super::validate_password)
/// before encrypting.
///
/// # Errors
///
/// Returns `FinvaultError::InvalidInput` if the salt is shorter than 16 bytes.
///
/// # Examples
///
/// ```
/// use finvault_core::crypto::derive_key;
///
/// let salt = b"unique-salt-16by";
/// let key = derive_key("my-password", salt).unwrap();
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(password: &str, salt: &[u8]) -> Result<DerivedKey> {
    if salt.len() < MIN_SALT_LENGTH {
        return Err(FinvaultError::InvalidInput(format!(
            "Salt must be at least {} bytes",
            MIN_SALT_LENGTH
        )));
    }

    let mut key_bytes = [0u8; KEY_LENGTH];
    pbkdf2::pbkdf2_hmac::<Sha256>(
        password.as_bytes(),
        salt,
        PBKDF2_ITERATIONS,
        &mut key_bytes,
    );
    tracing::debug!(iterations = PBKDF2_ITERATIONS, "derived key");

    Ok(DerivedKey::from_bytes(key_bytes))
}
