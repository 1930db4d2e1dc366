//! Cryptographic operations for finvault.
//!
//! - **PBKDF2-HMAC-SHA256** (100k iterations) turns a password and a random
//!   salt into an AES-256 key
//! - **AES-256-GCM** encrypts and authenticates each value
//! - **SHA-256** provides a keyless fingerprint
//!
//! ## Security Model
//!
//! - A fresh salt and nonce for every encryption
//! - Wrong passwords and tampered blobs fail loudly with
//!   `AuthenticationFailed`, never with garbage plaintext
//! - Derived keys are zeroized from memory on drop
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of the stored blobs
//! - Offline guessing (slowed by the KDF)
//!
//! We do NOT defend against:
//! - A compromised host or keylogger
//! - Values written with the insecure fallback

pub mod blob;
pub mod cipher;
#[cfg(feature = "insecure-fallback")]
pub mod fallback;
pub mod hash;
pub mod key;
pub mod password;

pub use blob::EncryptedBlob;
pub use cipher::{cipher_for_mode, decrypt, encrypt, BlobCipher, CipherMode, SecureCipher};
#[cfg(feature = "insecure-fallback")]
pub use fallback::InsecureEncoding;
pub use hash::hash;
pub use key::{derive_key, DerivedKey};
pub use password::validate_password;
