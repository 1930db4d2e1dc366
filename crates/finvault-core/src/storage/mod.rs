//! Encrypted key/value storage.
//!
//! - **traits**: the `KeyValueBackend` interface
//! - **memory**: volatile backend
//! - **file**: JSON file backend with atomic writes
//! - **secure**: encrypting wrapper used by callers

pub mod file;
pub mod memory;
pub mod secure;
pub mod traits;

pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use secure::SecureStorage;
pub use traits::KeyValueBackend;
