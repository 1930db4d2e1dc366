//! Key/value backend trait.
//!
//! A backend holds opaque strings under application-chosen keys, the way
//! browser local or session storage does. It never sees plaintext; see
//! [`SecureStorage`](super::SecureStorage) for the encrypting layer.

use crate::error::Result;

/// Storage backend for encoded values.
///
/// All implementations must ensure:
/// - `keys` returns keys in ascending order
/// - A successful `set` or `remove` is visible to the next `get`
/// - Persistent backends write atomically
pub trait KeyValueBackend: Send + Sync {
    /// Get the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `FinvaultError::Storage` if a persistent backend cannot write.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Returns whether a value was present.
    fn remove(&mut self, key: &str) -> Result<bool>;

    /// List all keys.
    fn keys(&self) -> Result<Vec<String>>;

    /// Remove every key.
    fn clear(&mut self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_backend(_backend: &mut dyn KeyValueBackend) {}
    }
}
