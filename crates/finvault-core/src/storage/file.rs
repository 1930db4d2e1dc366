//! JSON-file backend, the local-storage analogue.
//!
//! The whole map lives in memory and is rewritten atomically on every
//! mutation. Stores hold a handful of small blobs, so this stays cheap.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::traits::KeyValueBackend;
use crate::error::{FinvaultError, Result};
use crate::fs::write_atomic;

#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileBackend {
    /// Open the store at `path`. A missing file is an empty store; nothing is
    /// written until the first mutation.
    ///
    /// # Errors
    ///
    /// Returns `FinvaultError::Storage` if the file exists but cannot be read
    /// or is not a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| {
                FinvaultError::Storage(format!("Failed to read store {}: {}", path.display(), e))
            })?;
            if contents.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&contents).map_err(|e| {
                    FinvaultError::Storage(format!(
                        "Store {} is corrupted: {}",
                        path.display(),
                        e
                    ))
                })?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), keys = entries.len(), "opened file store");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let contents = serde_json::to_vec_pretty(&self.entries)
            .map_err(|e| FinvaultError::Storage(format!("Failed to encode store: {}", e)))?;
        write_atomic(&self.path, &contents).map_err(|e| {
            FinvaultError::Storage(format!("Failed to write store {}: {}", self.path.display(), e))
        })
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(err) = self.persist() {
            // Keep memory consistent with disk.
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        match self.entries.remove(key) {
            Some(old) => {
                if let Err(err) = self.persist() {
                    self.entries.insert(key.to_string(), old);
                    return Err(err);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn clear(&mut self) -> Result<()> {
        let previous = std::mem::take(&mut self.entries);
        if let Err(err) = self.persist() {
            self.entries = previous;
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty_and_not_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let backend = FileBackend::open(&path).unwrap();
        assert!(backend.keys().unwrap().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut backend = FileBackend::open(&path).unwrap();
        backend.set("budget", "blob-1").unwrap();
        backend.set("goals", "blob-2").unwrap();
        assert!(backend.remove("goals").unwrap());

        let reopened = FileBackend::open(&path).unwrap();
        assert_eq!(reopened.get("budget").unwrap().as_deref(), Some("blob-1"));
        assert_eq!(reopened.get("goals").unwrap(), None);
    }

    #[test]
    fn test_clear_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut backend = FileBackend::open(&path).unwrap();
        backend.set("a", "1").unwrap();
        backend.clear().unwrap();

        assert!(FileBackend::open(&path).unwrap().keys().unwrap().is_empty());
    }

    #[test]
    fn test_corrupted_file_is_storage_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let result = FileBackend::open(&path);
        assert!(matches!(result, Err(FinvaultError::Storage(_))));
    }
}
