//! Record store contract.
//!
//! The store is the source of truth for records. The engine only lists
//! records and requests field patches by id.

mod memory;

pub use memory::InMemoryStore;

use std::collections::HashMap;

use crate::error::StoreError;
use crate::model::{Record, Value};

/// Field updates keyed by column id.
pub type FieldUpdates = HashMap<String, Value>;

/// Backend trait for record storage.
pub trait RecordStore {
    /// All records in natural (insertion) order.
    fn list(&self) -> Vec<Record>;

    /// Get a record by id.
    fn get(&self, id: &str) -> Option<Record>;

    /// Merge field updates into the record with the given id.
    ///
    /// Returns the updated record, or [`StoreError::NotFound`].
    fn patch(&mut self, id: &str, updates: FieldUpdates) -> Result<Record, StoreError>;
}
