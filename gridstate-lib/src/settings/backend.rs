//! Settings backend trait.

use crate::error::SettingsError;

/// Backend trait for settings storage.
///
/// Implementations handle raw string storage/retrieval.
/// The `SettingsProvider` wraps this with typed serialization.
pub trait SettingsBackend: Send + Sync {
    /// Get the string stored under a key.
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError>;

    /// Store a string under a key, replacing any previous value.
    fn set(&self, key: &str, value: String) -> Result<(), SettingsError>;

    /// Delete a key.
    fn delete(&self, key: &str) -> Result<(), SettingsError>;

    /// Get all keys matching a prefix.
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, SettingsError>;
}
