//! Dynamic grid record

use std::collections::HashMap;

use chrono::DateTime;
use chrono::Utc;

use super::Value;

/// A record shown as one grid row.
///
/// Records hold field values as a `HashMap<String, Value>` keyed by column
/// id. The engine never creates or destroys records; it reads them from a
/// [`RecordStore`](crate::store::RecordStore) and requests field patches.
///
/// # Example
///
/// ```
/// use gridstate_lib::model::Record;
///
/// let record = Record::new("1")
///     .set("name", "Enterprise Software License")
///     .set("value", 125_000i64);
///
/// assert_eq!(record.get_text("name"), Some("Enterprise Software License"));
/// assert_eq!(record.get_f64("value"), Some(125_000.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Stable unique identifier.
    pub(crate) id: String,

    /// The field values.
    pub(crate) fields: HashMap<String, Value>,

    /// Time of the last patch applied through a store.
    pub(crate) updated_at: Option<DateTime<Utc>>,
}

impl Record {
    /// Creates a new empty record with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: HashMap::new(),
            updated_at: None,
        }
    }

    // =========================================================================
    // Metadata accessors
    // =========================================================================

    /// Returns the record id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sets the record id.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Returns the time of the last patch, if any.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Stamps the record as updated at the given time.
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the field value, treating absent fields as null.
    pub fn value(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&Value::Null)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Sets a field value (builder style).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts or replaces a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Applies every update, replacing existing fields.
    pub fn merge(&mut self, updates: HashMap<String, Value>) {
        self.fields.extend(updates);
    }

    // =========================================================================
    // Typed getters
    // =========================================================================

    /// Returns a text or select field as a string slice.
    pub fn get_text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_text)
    }

    /// Returns a numeric field as `f64`.
    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_f64)
    }
}
