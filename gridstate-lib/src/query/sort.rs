//! Multi-key sort specification.

use serde::Deserialize;
use serde::Serialize;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// Applies this direction to an ascending comparison result.
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// A single sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// Column to sort by.
    #[serde(rename = "key")]
    pub column_id: String,
    /// Direction for this key.
    pub direction: SortDirection,
}

impl SortKey {
    /// Create an ascending key.
    pub fn asc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Create a descending key.
    pub fn desc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Ordered sort keys; the first key is the primary one.
///
/// Column ids are unique within the sequence. An empty spec means natural
/// (insertion) order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortSpec(Vec<SortKey>);

impl SortSpec {
    /// Create an empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a spec from keys, keeping the first occurrence of each column.
    pub fn from_keys(keys: impl IntoIterator<Item = SortKey>) -> Self {
        let mut spec = Self::new();
        for key in keys {
            if spec.position(&key.column_id).is_none() {
                spec.0.push(key);
            }
        }
        spec
    }

    /// The keys in priority order.
    pub fn keys(&self) -> &[SortKey] {
        &self.0
    }

    /// Returns `true` if no key is active.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Index of the key for a column.
    pub fn position(&self, column_id: &str) -> Option<usize> {
        self.0.iter().position(|k| k.column_id == column_id)
    }

    /// Direction of the key for a column.
    pub fn direction(&self, column_id: &str) -> Option<SortDirection> {
        self.position(column_id).map(|i| self.0[i].direction)
    }

    /// Advance the sort cycle for a column.
    ///
    /// Without `multi_key` the column becomes the only key and cycles
    /// asc → desc → none; picking a different column restarts at asc.
    /// With `multi_key` an absent column is appended as asc, an asc key
    /// flips to desc in place and a desc key is removed.
    pub fn toggle(&mut self, column_id: &str, multi_key: bool) {
        let existing = self.position(column_id);

        if multi_key {
            match existing {
                Some(index) => match self.0[index].direction {
                    SortDirection::Asc => self.0[index].direction = SortDirection::Desc,
                    SortDirection::Desc => {
                        self.0.remove(index);
                    }
                },
                None => self.0.push(SortKey::asc(column_id)),
            }
            return;
        }

        match (existing, self.0.len()) {
            (Some(0), 1) => match self.0[0].direction {
                SortDirection::Asc => self.0[0].direction = SortDirection::Desc,
                SortDirection::Desc => self.0.clear(),
            },
            _ => self.0 = vec![SortKey::asc(column_id)],
        }
    }

    /// Replace the spec with a single key.
    pub fn set_single(&mut self, column_id: &str, direction: SortDirection) {
        self.0 = vec![SortKey {
            column_id: column_id.to_string(),
            direction,
        }];
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Keep only keys accepted by the predicate.
    pub fn retain(&mut self, mut keep: impl FnMut(&SortKey) -> bool) {
        self.0.retain(|k| keep(k));
    }
}

impl From<Vec<SortKey>> for SortSpec {
    fn from(keys: Vec<SortKey>) -> Self {
        Self::from_keys(keys)
    }
}
