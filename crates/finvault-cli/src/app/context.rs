//! Application context for the finvault CLI.
//!
//! Combines CLI arguments with the lazily-loaded config.

use once_cell::unsync::OnceCell;

use finvault_core::crypto::{cipher_for_mode, BlobCipher, CipherMode};
use finvault_core::storage::{FileBackend, SecureStorage};

use crate::cli::Cli;
use crate::config::FinvaultConfig;
use crate::errors::CliError;

use super::resolver::load_config;

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<FinvaultConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&FinvaultConfig> {
        self.config.get_or_try_init(|| load_config(self.cli))
    }

    /// Build the configured cipher.
    ///
    /// The insecure fallback needs both the config value and
    /// `--allow-insecure`; either alone is refused.
    pub fn cipher(&self) -> anyhow::Result<Box<dyn BlobCipher>> {
        let mode = self.config()?.security.cipher;
        if mode == CipherMode::InsecureFallback && !self.cli.allow_insecure {
            return Err(CliError::CryptoUnavailable(
                "Config selects the insecure fallback cipher. Pass --allow-insecure to use it."
                    .to_string(),
            )
            .into());
        }
        let cipher = cipher_for_mode(mode)?;
        if !cipher.is_secure() && !self.quiet() {
            eprintln!("WARNING: using {}; values are NOT encrypted.", cipher.name());
        }
        Ok(cipher)
    }

    /// Open the configured file store with the configured cipher.
    pub fn open_store(&self) -> anyhow::Result<SecureStorage<FileBackend>> {
        let path = self.config()?.storage_path()?;
        let backend = FileBackend::open(path)?;
        let store = SecureStorage::new(backend, self.cipher()?);
        tracing::debug!(
            path = %store.backend().path().display(),
            cipher = store.cipher_name(),
            "opened store"
        );
        Ok(store)
    }
}
