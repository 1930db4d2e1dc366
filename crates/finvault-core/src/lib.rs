//! # finvault core
//!
//! Core library for finvault: the non-visual utilities behind a personal
//! finance dashboard.
//!
//! ## Architecture
//!
//! - **crypto**: password-based authenticated encryption and hashing
//! - **score**: synthesized credit-score histories for charts
//! - **storage**: encrypted key/value storage over memory or file backends
//! - **fs**: atomic file writes

pub mod crypto;
pub mod error;
pub mod fs;
pub mod score;
pub mod storage;

pub use error::{FinvaultError, Result};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
