//! Reversible encoding for hosts without the cipher stack.
//!
//! THIS IS NOT ENCRYPTION. Values are base64 with a marker prefix and the
//! password is ignored. Only compiled with the `insecure-fallback` feature,
//! only reachable through an explicit [`CipherMode::InsecureFallback`].
//!
//! [`CipherMode::InsecureFallback`]: super::CipherMode::InsecureFallback

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::cipher::BlobCipher;
use crate::error::{FinvaultError, Result};

/// Marker so encoded values are never mistaken for real blobs.
pub const INSECURE_PREFIX: &str = "insecure:";

#[derive(Debug, Default, Clone, Copy)]
pub struct InsecureEncoding;

impl InsecureEncoding {
    pub fn new() -> Self {
        Self
    }
}

impl BlobCipher for InsecureEncoding {
    fn name(&self) -> &'static str {
        "insecure-base64"
    }

    fn is_secure(&self) -> bool {
        false
    }

    fn encrypt(&self, plaintext: &[u8], _password: &str) -> Result<String> {
        tracing::warn!("writing value with the insecure fallback; it is NOT encrypted");
        Ok(format!("{}{}", INSECURE_PREFIX, STANDARD.encode(plaintext)))
    }

    fn decrypt(&self, encoded: &str, _password: &str) -> Result<Vec<u8>> {
        tracing::warn!("reading value with the insecure fallback");
        let body = encoded
            .trim()
            .strip_prefix(INSECURE_PREFIX)
            .ok_or(FinvaultError::AuthenticationFailed)?;
        STANDARD
            .decode(body)
            .map_err(|_| FinvaultError::AuthenticationFailed)
    }
}
