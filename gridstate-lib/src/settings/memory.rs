//! In-memory settings backend

use dashmap::DashMap;

use super::SettingsBackend;
use crate::error::SettingsError;

/// Settings storage backed by a concurrent hash map.
///
/// Data is lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    store: DashMap<String, String>,
}

impl MemoryBackend {
    /// Creates a new empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-populated with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let backend = Self::new();
        backend.store.insert(key.into(), value.into());
        backend
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl SettingsBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.store.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: String) -> Result<(), SettingsError> {
        self.store.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SettingsError> {
        self.store.remove(key);
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, SettingsError> {
        Ok(self
            .store
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.key().clone())
            .collect())
    }
}
