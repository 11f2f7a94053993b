//! Record store error types

use thiserror::Error;

/// Errors returned by a [`RecordStore`](crate::store::RecordStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record with the given id exists.
    #[error("record not found: {0}")]
    NotFound(String),
    /// A record with the given id already exists.
    #[error("duplicate record id: {0}")]
    Duplicate(String),
}
