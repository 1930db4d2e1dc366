//! One-way digest for non-secret fingerprints.

use sha2::{Digest, Sha256};

/// SHA-256 of `data`, lowercase hex (64 characters).
///
/// Deterministic and keyless; do not use it to store passwords.
pub fn hash(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
