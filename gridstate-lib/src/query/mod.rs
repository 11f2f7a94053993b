//! Query state: sort and filter specifications.

mod filter;
mod sort;

pub use filter::*;
pub use sort::*;

use crate::model::ColumnRegistry;

/// Sort and filter state of a grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    /// Active sort keys.
    pub sort: SortSpec,
    /// Active filters.
    pub filter: FilterSpec,
}

impl QueryState {
    /// Create an empty query state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the sort cycle for a sortable column.
    ///
    /// Non-sortable and unknown columns are ignored. Returns `true` if the
    /// sort spec changed.
    pub fn toggle_sort(&mut self, registry: &ColumnRegistry, column_id: &str, multi_key: bool) -> bool {
        if !registry.is_sortable(column_id) {
            log::debug!("ignoring sort toggle on non-sortable column {column_id}");
            return false;
        }
        self.sort.toggle(column_id, multi_key);
        log::debug!("sort is now {:?}", self.sort.keys());
        true
    }

    /// Sort by a single column in a fixed direction.
    ///
    /// Returns `true` if the sort spec changed.
    pub fn set_sort(
        &mut self,
        registry: &ColumnRegistry,
        column_id: &str,
        direction: SortDirection,
    ) -> bool {
        if !registry.is_sortable(column_id) {
            return false;
        }
        let previous = self.sort.clone();
        self.sort.set_single(column_id, direction);
        self.sort != previous
    }

    /// Set or clear a column filter. Returns `true` if the filter changed.
    ///
    /// The column is not validated against the registry: a filter on a
    /// column the UI never offers a control for is stored as given.
    pub fn set_filter(&mut self, column_id: &str, raw: &str) -> bool {
        self.filter.set(column_id, raw)
    }

    /// Drop sort keys and filters that cannot apply to the registry.
    pub(crate) fn reconcile(&mut self, registry: &ColumnRegistry) {
        let keys: Vec<SortKey> = self
            .sort
            .keys()
            .iter()
            .filter(|k| registry.is_sortable(&k.column_id))
            .cloned()
            .collect();
        self.sort = SortSpec::from_keys(keys);
        self.filter.normalize();
    }
}
