use std::path::{Path, PathBuf};

use finvault_core::crypto::CipherMode;
use finvault_core::score::HistoryVariant;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FinvaultConfig {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub security: SecuritySection,
    #[serde(default)]
    pub history: HistorySection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageSection {
    /// Store file; defaults to the XDG data dir when unset.
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SecuritySection {
    #[serde(default)]
    pub cipher: CipherMode,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HistorySection {
    #[serde(default)]
    pub variant: HistoryVariant,
    pub months: Option<usize>,
}

impl FinvaultConfig {
    pub fn new(storage_path: PathBuf) -> Self {
        Self {
            storage: StorageSection {
                path: Some(storage_path.to_string_lossy().to_string()),
            },
            ..Self::default()
        }
    }

    /// Resolved store path.
    pub fn storage_path(&self) -> anyhow::Result<PathBuf> {
        match self.storage.path.as_deref() {
            Some(path) if !path.trim().is_empty() => Ok(expand_home(path)?),
            _ => default_storage_path(),
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_storage_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("store.json"))
}

pub fn read_config(path: &Path) -> anyhow::Result<FinvaultConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &FinvaultConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("finvault"));
        }
    }
    Ok(home_dir()?.join(".config").join("finvault"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("finvault"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("finvault"))
}

fn expand_home(path: &str) -> anyhow::Result<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => Ok(home_dir()?.join(rest)),
        None => Ok(PathBuf::from(path)),
    }
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
