//! Application-level utilities for the finvault CLI.
//!
//! This module provides:
//! - Config path resolution and loading
//! - The per-invocation application context
//! - Password handling with retry logic

mod context;
mod password;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use password::with_password_retry;
pub use resolver::resolve_config_path;
