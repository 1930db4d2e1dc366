//! Wire layout of an encrypted value.
//!
//! A blob is `salt (16) || nonce (12) || ciphertext || tag (16)`, hex-encoded
//! as a single string. This layout is what browser storage already holds and
//! must not change.

use std::fmt;
use std::str::FromStr;

use crate::error::{FinvaultError, Result};

/// Salt length in bytes.
pub const SALT_LENGTH: usize = 16;

/// AES-GCM nonce length in bytes.
pub const NONCE_LENGTH: usize = 12;

/// AES-GCM authentication tag length in bytes.
pub const TAG_LENGTH: usize = 16;

/// Smallest valid blob: empty plaintext still carries a tag.
pub const MIN_BLOB_LENGTH: usize = SALT_LENGTH + NONCE_LENGTH + TAG_LENGTH;

/// A parsed encrypted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedBlob {
    /// Per-encryption KDF salt
    pub salt: [u8; SALT_LENGTH],

    /// Per-encryption cipher nonce
    pub nonce: [u8; NONCE_LENGTH],

    /// Ciphertext with the authentication tag appended
    pub ciphertext: Vec<u8>,
}

impl EncryptedBlob {
    /// Parse a hex-encoded blob. Hex digits may be upper or lower case and
    /// surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// A blob that is not hex or is too short to hold salt, nonce and tag is
    /// indistinguishable from a corrupted one and yields
    /// `FinvaultError::AuthenticationFailed`.
    pub fn parse(encoded: &str) -> Result<Self> {
        let bytes = hex::decode(encoded.trim()).map_err(|e| {
            tracing::debug!(error = %e, "blob is not valid hex");
            FinvaultError::AuthenticationFailed
        })?;
        Self::from_bytes(&bytes)
    }

    /// Split raw blob bytes into their parts.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < MIN_BLOB_LENGTH {
            tracing::debug!(
                len = bytes.len(),
                min = MIN_BLOB_LENGTH,
                "blob too short"
            );
            return Err(FinvaultError::AuthenticationFailed);
        }

        let (salt, rest) = bytes.split_at(SALT_LENGTH);
        let (nonce, ciphertext) = rest.split_at(NONCE_LENGTH);

        let mut blob = Self {
            salt: [0u8; SALT_LENGTH],
            nonce: [0u8; NONCE_LENGTH],
            ciphertext: ciphertext.to_vec(),
        };
        blob.salt.copy_from_slice(salt);
        blob.nonce.copy_from_slice(nonce);
        Ok(blob)
    }

    /// Concatenate salt, nonce and ciphertext.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(SALT_LENGTH + NONCE_LENGTH + self.ciphertext.len());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Lowercase hex encoding of [`to_bytes`](Self::to_bytes).
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl fmt::Display for EncryptedBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for EncryptedBlob {
    type Err = FinvaultError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EncryptedBlob {
        EncryptedBlob {
            salt: [1u8; SALT_LENGTH],
            nonce: [2u8; NONCE_LENGTH],
            ciphertext: vec![3u8; TAG_LENGTH + 4],
        }
    }

    #[test]
    fn test_layout_is_salt_nonce_ciphertext() {
        let hex = sample().to_hex();

        assert_eq!(hex.len(), 2 * (SALT_LENGTH + NONCE_LENGTH + TAG_LENGTH + 4));
        assert!(hex.starts_with(&"01".repeat(SALT_LENGTH)));
        assert_eq!(
            &hex[2 * SALT_LENGTH..2 * (SALT_LENGTH + NONCE_LENGTH)],
            "02".repeat(NONCE_LENGTH)
        );
    }

    #[test]
    fn test_parse_accepts_uppercase_and_whitespace() {
        let hex = format!("  {}\n", sample().to_hex().to_uppercase());
        let parsed: EncryptedBlob = hex.parse().unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let result = EncryptedBlob::parse("not a blob");
        assert!(matches!(result, Err(FinvaultError::AuthenticationFailed)));
    }

    #[test]
    fn test_parse_rejects_odd_length() {
        let mut hex = sample().to_hex();
        hex.pop();
        assert!(matches!(
            EncryptedBlob::parse(&hex),
            Err(FinvaultError::AuthenticationFailed)
        ));
    }

    #[test]
    fn test_parse_rejects_truncated_blob() {
        let short = hex::encode([0u8; MIN_BLOB_LENGTH - 1]);
        assert!(matches!(
            EncryptedBlob::parse(&short),
            Err(FinvaultError::AuthenticationFailed)
        ));

        let minimal = hex::encode([0u8; MIN_BLOB_LENGTH]);
        let blob = EncryptedBlob::parse(&minimal).unwrap();
        assert_eq!(blob.ciphertext.len(), TAG_LENGTH);
    }
}
