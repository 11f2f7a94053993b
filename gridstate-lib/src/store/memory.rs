//! In-memory record store

use chrono::Utc;
use uuid::Uuid;

use super::{FieldUpdates, RecordStore};
use crate::error::StoreError;
use crate::model::Record;

/// A record store backed by an insertion-ordered vector.
///
/// # Example
///
/// ```
/// use gridstate_lib::model::Record;
/// use gridstate_lib::store::{InMemoryStore, RecordStore};
///
/// let mut store = InMemoryStore::new();
/// store.insert(Record::new("1").set("name", "Training Services")).unwrap();
/// assert_eq!(store.list().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given records.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Appends a record. An empty id is replaced with a fresh UUID.
    ///
    /// Returns the id of the inserted record.
    pub fn insert(&mut self, mut record: Record) -> Result<String, StoreError> {
        if record.id().is_empty() {
            record.set_id(Uuid::new_v4().to_string());
        }
        if self.position(record.id()).is_some() {
            return Err(StoreError::Duplicate(record.id().to_string()));
        }
        let id = record.id().to_string();
        self.records.push(record);
        Ok(id)
    }

    /// Removes a record by id, returning it.
    pub fn remove(&mut self, id: &str) -> Result<Record, StoreError> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(self.records.remove(index))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow all records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}

impl RecordStore for InMemoryStore {
    fn list(&self) -> Vec<Record> {
        self.records.clone()
    }

    fn get(&self, id: &str) -> Option<Record> {
        self.records.iter().find(|r| r.id() == id).cloned()
    }

    fn patch(&mut self, id: &str, updates: FieldUpdates) -> Result<Record, StoreError> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let record = &mut self.records[index];
        record.merge(updates);
        record.touch(Utc::now());
        Ok(record.clone())
    }
}
