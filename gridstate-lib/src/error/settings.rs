//! Settings storage error types

use thiserror::Error;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("serialization error: {0}")]
    Serialization(serde_json::Error),
    #[error("deserialization error: {0}")]
    Deserialization(serde_json::Error),
}

impl SettingsError {
    /// Wraps any backend failure.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }
}
