//! Column descriptors and the column registry

use super::ValueType;

/// A grid column definition.
///
/// Descriptors are fixed at startup; the engine only reads their
/// capability flags.
///
/// # Example
///
/// ```
/// use gridstate_lib::model::{ColumnDescriptor, ValueType};
///
/// let stage = ColumnDescriptor::new("stage", "Stage", ValueType::Select)
///     .sortable()
///     .filterable()
///     .editable()
///     .options(["Lead", "Qualified", "Won", "Lost"]);
///
/// assert!(stage.accepts_option("Won"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Unique identifier, also the record field name.
    pub id: String,
    /// Header text.
    pub label: String,
    /// Declared value type.
    pub value_type: ValueType,
    /// Whether the header can be clicked to sort.
    pub sortable: bool,
    /// Whether a filter control is offered.
    pub filterable: bool,
    /// Whether cells can be edited inline.
    pub editable: bool,
    /// Allowed values for select columns.
    pub options: Option<Vec<String>>,
}

impl ColumnDescriptor {
    /// Create a new column with no capabilities.
    pub fn new(id: impl Into<String>, label: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value_type,
            sortable: false,
            filterable: false,
            editable: false,
            options: None,
        }
    }

    /// Allow sorting on this column.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Allow filtering on this column.
    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Allow inline edits on this column.
    pub fn editable(mut self) -> Self {
        self.editable = true;
        self
    }

    /// Set the enumerated option set.
    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Returns `true` if `value` is one of the options, or no option set exists.
    pub fn accepts_option(&self, value: &str) -> bool {
        match &self.options {
            Some(options) => options.iter().any(|o| o == value),
            None => true,
        }
    }
}

/// Ordered, immutable list of column descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRegistry {
    columns: Vec<ColumnDescriptor>,
}

impl ColumnRegistry {
    /// Create a registry from descriptors in their natural order.
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self { columns }
    }

    /// All descriptors in registry order.
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Look up a descriptor by id.
    pub fn get(&self, id: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Returns `true` if the registry knows the column id.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Returns `true` if the column exists and is sortable.
    pub fn is_sortable(&self, id: &str) -> bool {
        self.get(id).is_some_and(|c| c.sortable)
    }

    /// Column ids in registry order.
    pub fn ids(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.id.clone()).collect()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<ColumnDescriptor> for ColumnRegistry {
    fn from_iter<I: IntoIterator<Item = ColumnDescriptor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
