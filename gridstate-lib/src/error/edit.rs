//! Inline edit error types

use thiserror::Error;

use super::StoreError;
use crate::model::ValueType;

/// Errors raised while starting or committing an inline cell edit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// No cell has keyboard focus.
    #[error("no cell is focused")]
    NoFocus,
    /// No edit is in progress.
    #[error("no edit in progress")]
    NotEditing,
    /// The focused column does not allow edits.
    #[error("column is not editable: {0}")]
    NotEditable(String),
    /// The edit buffer could not be parsed as the column's value type.
    #[error("invalid {expected} value for {column}: {input:?}")]
    InvalidValue {
        column: String,
        input: String,
        expected: ValueType,
    },
    /// The record store rejected the patch.
    #[error(transparent)]
    Store(#[from] StoreError),
}
