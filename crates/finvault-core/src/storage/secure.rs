//! Encrypting layer over a key/value backend.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::traits::KeyValueBackend;
use crate::crypto::{BlobCipher, SecureCipher};
use crate::error::{FinvaultError, Result};

/// Longest accepted key, in bytes.
pub const MAX_KEY_BYTES: usize = 256;

/// Values are serialized to JSON, encrypted with the injected cipher, and
/// stored as the cipher's string form.
pub struct SecureStorage<B> {
    backend: B,
    cipher: Box<dyn BlobCipher>,
}

impl<B: KeyValueBackend> SecureStorage<B> {
    pub fn new(backend: B, cipher: Box<dyn BlobCipher>) -> Self {
        if !cipher.is_secure() {
            tracing::warn!(cipher = cipher.name(), "secure storage opened with a non-secure cipher");
        }
        Self { backend, cipher }
    }

    /// Storage backed by [`SecureCipher`].
    pub fn with_secure_cipher(backend: B) -> Self {
        Self::new(backend, Box::new(SecureCipher::new()))
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn cipher_name(&self) -> &'static str {
        self.cipher.name()
    }

    /// Encrypt and store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns `FinvaultError::Validation` for an empty or over-long key,
    /// `FinvaultError::CryptoUnavailable` if encryption cannot run, and
    /// `FinvaultError::Storage` if the backend cannot write.
    pub fn set_item<T: Serialize + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
        password: &str,
    ) -> Result<()> {
        validate_key(key)?;
        let json = serde_json::to_vec(value)?;
        let encoded = self.cipher.encrypt(&json, password)?;
        self.backend.set(key, &encoded)?;
        tracing::debug!(key, "stored encrypted item");
        Ok(())
    }

    /// Load and decrypt the value under `key`.
    ///
    /// Returns `Ok(None)` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `FinvaultError::AuthenticationFailed` for a wrong password or a
    /// corrupted value, and `FinvaultError::Validation` if the decrypted JSON
    /// does not match `T`.
    pub fn get_item<T: DeserializeOwned>(&self, key: &str, password: &str) -> Result<Option<T>> {
        validate_key(key)?;
        let Some(encoded) = self.backend.get(key)? else {
            return Ok(None);
        };
        let json = self.cipher.decrypt(&encoded, password)?;
        Ok(Some(serde_json::from_slice(&json)?))
    }

    /// Like [`get_item`](Self::get_item), but an absent key is an error.
    ///
    /// # Errors
    ///
    /// Returns `FinvaultError::NotFound` if nothing is stored under `key`,
    /// plus every error [`get_item`](Self::get_item) can return.
    pub fn get_required<T: DeserializeOwned>(&self, key: &str, password: &str) -> Result<T> {
        self.get_item(key, password)?
            .ok_or_else(|| FinvaultError::NotFound(format!("No value stored under \"{}\"", key)))
    }

    /// Remove `key`. Returns whether it was present.
    pub fn remove_item(&mut self, key: &str) -> Result<bool> {
        validate_key(key)?;
        self.backend.remove(key)
    }

    /// Whether a value is stored under `key`, without decrypting it.
    pub fn contains_key(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(self.backend.get(key)?.is_some())
    }

    pub fn keys(&self) -> Result<Vec<String>> {
        self.backend.keys()
    }

    pub fn clear(&mut self) -> Result<()> {
        self.backend.clear()
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(FinvaultError::Validation("Key cannot be empty".to_string()));
    }
    if key.len() > MAX_KEY_BYTES {
        return Err(FinvaultError::Validation(format!(
            "Key too long (max {} bytes)",
            MAX_KEY_BYTES
        )));
    }
    Ok(())
}
