//! Row selection and expansion state.

use std::collections::HashSet;

/// Tri-state of the header "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectAllState {
    /// No displayed row is selected.
    #[default]
    Unchecked,
    /// Some but not all displayed rows are selected.
    Indeterminate,
    /// Every displayed row is selected (and at least one is displayed).
    Checked,
}

/// Tracks selected and expanded rows by record id.
///
/// Both sets may hold ids of records that no longer exist; such ids are
/// ignored wherever the sets are compared with displayed rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSelection {
    /// Selected record ids.
    pub selected: HashSet<String>,
    /// Expanded record ids.
    pub expanded: HashSet<String>,
}

impl RowSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle selection of a row. Returns `true` if it is now selected.
    pub fn toggle_selected(&mut self, id: &str) -> bool {
        toggle(&mut self.selected, id)
    }

    /// Toggle expansion of a row. Returns `true` if it is now expanded.
    pub fn toggle_expanded(&mut self, id: &str) -> bool {
        toggle(&mut self.expanded, id)
    }

    /// Check if a row is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Check if a row is expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Select exactly the displayed rows, or nothing.
    ///
    /// With `checked` the selection becomes the given displayed ids, so
    /// rows hidden by a filter are never selected. Without it the
    /// selection is emptied. Returns `true` if the selection changed.
    pub fn select_all<'a>(&mut self, checked: bool, displayed: impl IntoIterator<Item = &'a str>) -> bool {
        let next: HashSet<String> = if checked {
            displayed.into_iter().map(str::to_string).collect()
        } else {
            HashSet::new()
        };
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }

    /// Clear all selections. Returns `true` if anything was selected.
    pub fn clear_selection(&mut self) -> bool {
        let changed = !self.selected.is_empty();
        self.selected.clear();
        changed
    }

    /// Header checkbox state for the given displayed ids.
    pub fn select_all_state<'a>(&self, displayed: impl IntoIterator<Item = &'a str>) -> SelectAllState {
        let mut total = 0;
        let mut selected = 0;
        for id in displayed {
            total += 1;
            if self.selected.contains(id) {
                selected += 1;
            }
        }
        match selected {
            0 => SelectAllState::Unchecked,
            n if n == total => SelectAllState::Checked,
            _ => SelectAllState::Indeterminate,
        }
    }
}

fn toggle(set: &mut HashSet<String>, id: &str) -> bool {
    if set.remove(id) {
        false
    } else {
        set.insert(id.to_string());
        true
    }
}
