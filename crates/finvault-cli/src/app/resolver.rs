//! Path resolution and loading for the config file.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, FinvaultConfig};

/// Resolve the config file path from `--config` / `FINVAULT_CONFIG`, falling
/// back to the XDG location.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.config.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    default_config_path()
}

/// Load the config, or defaults when no file exists yet.
pub fn load_config(cli: &Cli) -> anyhow::Result<FinvaultConfig> {
    let path = resolve_config_path(cli)?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file; using defaults");
        return Ok(FinvaultConfig::default());
    }
    tracing::debug!(path = %path.display(), "loading config");
    read_config(&path)
}
