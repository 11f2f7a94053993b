//! Settings storage for the terminal front-end.

mod sqlite;

pub use sqlite::SqliteBackend;

use thiserror::Error;

/// Errors raised by the SQLite settings backend.
#[derive(Debug, Error)]
pub enum SqliteError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("settings database lock poisoned")]
    Poisoned,
}
