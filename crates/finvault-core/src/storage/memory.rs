//! In-memory backend, the session-storage analogue.

use std::collections::BTreeMap;

use super::traits::KeyValueBackend;
use crate::error::Result;

#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    entries: BTreeMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        Ok(self.entries.remove(key).is_some())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut backend = MemoryBackend::new();
        backend.set("b", "2").unwrap();
        backend.set("a", "1").unwrap();

        assert_eq!(backend.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(backend.keys().unwrap(), vec!["a", "b"]);
        assert!(backend.remove("a").unwrap());
        assert!(!backend.remove("a").unwrap());
        assert_eq!(backend.get("a").unwrap(), None);
        assert_eq!(backend.len(), 1);

        backend.clear().unwrap();
        assert!(backend.is_empty());
    }
}
