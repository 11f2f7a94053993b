//! Settings system for typed key-value storage.

mod backend;
mod memory;

pub use backend::SettingsBackend;
pub use memory::MemoryBackend;

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::SettingsError;

/// Typed settings provider.
///
/// Wraps a `SettingsBackend` with typed serialization via JSON.
#[derive(Clone)]
pub struct SettingsProvider {
    backend: Arc<dyn SettingsBackend>,
}

impl SettingsProvider {
    /// Create a new settings provider with the given backend.
    pub fn new(backend: impl SettingsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Create a provider sharing an existing backend.
    pub fn shared(backend: Arc<dyn SettingsBackend>) -> Self {
        Self { backend }
    }

    /// Get the raw string stored under a key.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, SettingsError> {
        self.backend.get(key)
    }

    /// Store a raw string under a key.
    pub fn set_raw(&self, key: &str, value: String) -> Result<(), SettingsError> {
        self.backend.set(key, value)
    }

    /// Get a typed value for a key.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SettingsError> {
        match self.backend.get(key)? {
            Some(text) => Ok(Some(
                serde_json::from_str(&text).map_err(SettingsError::Deserialization)?,
            )),
            None => Ok(None),
        }
    }

    /// Get a typed value for a key, returning a default if not found.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, SettingsError> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Set a typed value for a key.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SettingsError> {
        let text = serde_json::to_string(value).map_err(SettingsError::Serialization)?;
        self.backend.set(key, text)
    }

    /// Delete a key.
    pub fn delete(&self, key: &str) -> Result<(), SettingsError> {
        self.backend.delete(key)
    }

    /// Get all keys matching a prefix.
    pub fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, SettingsError> {
        self.backend.keys_with_prefix(prefix)
    }
}

impl std::fmt::Debug for SettingsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsProvider").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_falls_back_when_missing() {
        let provider = SettingsProvider::new(MemoryBackend::new());
        assert_eq!(provider.get_or("widths", vec![150u32]).unwrap(), vec![150]);

        provider.set("widths", &vec![90u32, 120]).unwrap();
        assert_eq!(provider.get_or("widths", vec![150u32]).unwrap(), vec![90, 120]);
    }

    #[test]
    fn test_raw_text_is_decoded_on_typed_get() {
        let provider = SettingsProvider::new(MemoryBackend::new());
        provider.set_raw("limit", "42".to_string()).unwrap();
        assert_eq!(provider.get::<u32>("limit").unwrap(), Some(42));
        assert_eq!(provider.get_raw("limit").unwrap().as_deref(), Some("42"));

        provider.set_raw("limit", "forty".to_string()).unwrap();
        assert!(matches!(
            provider.get::<u32>("limit"),
            Err(SettingsError::Deserialization(_))
        ));
        assert!(provider.get_or("limit", 7u32).is_err());
    }
}
