//! Persisted grid state.
//!
//! The whole presentation state is stored as one JSON object under a
//! single settings key. Loading merges whatever is stored over defaults
//! field by field, so a partial, stale or corrupt blob never prevents the
//! grid from starting.

use std::collections::{HashMap, HashSet};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Map;

use crate::error::SettingsError;
use crate::layout::LayoutSpec;
use crate::model::ColumnRegistry;
use crate::query::{FilterSpec, QueryState, SortSpec};
use crate::selection::RowSelection;
use crate::settings::SettingsProvider;

/// Serializable snapshot of the grid's persisted state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSnapshot {
    pub sort_config: SortSpec,
    pub filter_config: FilterSpec,
    pub selected_rows: HashSet<String>,
    pub expanded_rows: HashSet<String>,
    pub visible_columns: HashSet<String>,
    pub column_order: Vec<String>,
    pub column_widths: HashMap<String, u32>,
}

impl GridSnapshot {
    /// Default state for a registry: no sort, no filter, nothing selected,
    /// every column visible in registry order.
    pub fn defaults(registry: &ColumnRegistry) -> Self {
        Self::from_parts(
            &QueryState::new(),
            &LayoutSpec::from_registry(registry),
            &RowSelection::new(),
        )
    }

    /// Capture the current engine state.
    pub fn from_parts(query: &QueryState, layout: &LayoutSpec, selection: &RowSelection) -> Self {
        Self {
            sort_config: query.sort.clone(),
            filter_config: query.filter.clone(),
            selected_rows: selection.selected.clone(),
            expanded_rows: selection.expanded.clone(),
            visible_columns: layout.visible.clone(),
            column_order: layout.order.clone(),
            column_widths: layout.widths.clone(),
        }
    }

    /// Split into the engine's state containers.
    pub fn into_parts(self) -> (QueryState, LayoutSpec, RowSelection) {
        (
            QueryState {
                sort: self.sort_config,
                filter: self.filter_config,
            },
            LayoutSpec {
                visible: self.visible_columns,
                order: self.column_order,
                widths: self.column_widths,
            },
            RowSelection {
                selected: self.selected_rows,
                expanded: self.expanded_rows,
            },
        )
    }

    /// Merge a stored JSON blob over `defaults`.
    ///
    /// Missing fields keep their default. A field that fails to decode is
    /// discarded with a warning and the rest of the blob still applies.
    /// Input that is not a JSON object yields the defaults unchanged.
    pub fn merge_json(defaults: Self, raw: &str) -> Self {
        let parsed: serde_json::Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("discarding unreadable grid state: {e}");
                return defaults;
            }
        };
        let Some(object) = parsed.as_object() else {
            log::warn!("discarding grid state that is not an object");
            return defaults;
        };

        let mut merged = defaults;
        merge_field(object, "sortConfig", &mut merged.sort_config);
        merge_field(object, "filterConfig", &mut merged.filter_config);
        merge_field(object, "selectedRows", &mut merged.selected_rows);
        merge_field(object, "expandedRows", &mut merged.expanded_rows);
        merge_field(object, "visibleColumns", &mut merged.visible_columns);
        merge_field(object, "columnOrder", &mut merged.column_order);
        merge_field(object, "columnWidths", &mut merged.column_widths);
        merged
    }
}

fn merge_field<T: DeserializeOwned>(object: &Map<String, serde_json::Value>, name: &str, slot: &mut T) {
    let Some(value) = object.get(name) else {
        return;
    };
    match T::deserialize(value) {
        Ok(decoded) => *slot = decoded,
        Err(e) => log::warn!("discarding persisted {name}: {e}"),
    }
}

/// Reads and writes the grid snapshot under one settings key.
#[derive(Debug, Clone)]
pub struct StatePersistence {
    settings: SettingsProvider,
    key: String,
}

impl StatePersistence {
    /// Create an adapter storing under `key`.
    pub fn new(settings: SettingsProvider, key: impl Into<String>) -> Self {
        Self {
            settings,
            key: key.into(),
        }
    }

    /// The settings key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored snapshot merged over `defaults`.
    ///
    /// Never fails: backend errors and malformed data fall back to the
    /// defaults with a warning.
    pub fn load(&self, defaults: GridSnapshot) -> GridSnapshot {
        match self.settings.get_raw(&self.key) {
            Ok(Some(raw)) => GridSnapshot::merge_json(defaults, &raw),
            Ok(None) => defaults,
            Err(e) => {
                log::warn!("failed to read grid state {}: {e}", self.key);
                defaults
            }
        }
    }

    /// Store a snapshot.
    pub fn save(&self, snapshot: &GridSnapshot) -> Result<(), SettingsError> {
        self.settings.set(&self.key, snapshot)
    }
}
