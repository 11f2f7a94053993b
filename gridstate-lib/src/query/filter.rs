//! Per-column text filters.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::model::Value;

/// Filter value that means "no filter on this column".
pub const MATCH_ALL: &str = "all";

/// Per-column search strings.
///
/// A column is only present while it has a non-empty needle; clearing a
/// filter removes the key rather than storing an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSpec(HashMap<String, String>);

impl FilterSpec {
    /// Create an empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the filter for a column.
    ///
    /// The raw value is trimmed; an empty result or [`MATCH_ALL`] removes
    /// the column's entry. Returns `true` if the spec changed.
    pub fn set(&mut self, column_id: &str, raw: &str) -> bool {
        let needle = raw.trim();
        if needle.is_empty() || needle == MATCH_ALL {
            return self.0.remove(column_id).is_some();
        }
        match self.0.get(column_id) {
            Some(existing) if existing == needle => false,
            _ => {
                self.0.insert(column_id.to_string(), needle.to_string());
                true
            }
        }
    }

    /// The needle for a column.
    pub fn get(&self, column_id: &str) -> Option<&str> {
        self.0.get(column_id).map(String::as_str)
    }

    /// Iterate over `(column_id, needle)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `true` if no filter is active.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of active filters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Remove every filter.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Drop entries that violate the non-empty invariant.
    pub(crate) fn normalize(&mut self) {
        self.0.retain(|_, needle| {
            let trimmed = needle.trim();
            !trimmed.is_empty() && trimmed != MATCH_ALL
        });
        for needle in self.0.values_mut() {
            let trimmed = needle.trim();
            if trimmed.len() != needle.len() {
                *needle = trimmed.to_string();
            }
        }
    }

    /// Returns `true` if the record passes every active filter.
    pub fn matches(&self, record: &crate::model::Record) -> bool {
        self.0
            .iter()
            .all(|(column_id, needle)| value_matches(record.value(column_id), needle))
    }
}

/// Match one field value against a needle.
///
/// Text and select values match by case-insensitive substring. Numeric
/// values match when the needle is a substring of their decimal form, so
/// `"500"` matches `1500` but not `499`. Dates are not filtered. Null never
/// matches an active filter.
pub fn value_matches(value: &Value, needle: &str) -> bool {
    match value {
        Value::Null => false,
        Value::Text(s) | Value::Select(s) => s.to_lowercase().contains(&needle.to_lowercase()),
        Value::Number(n) | Value::Percentage(n) => n.to_string().contains(needle),
        Value::Currency(m) => m.canonical().contains(needle),
        Value::Date(_) => true,
    }
}
