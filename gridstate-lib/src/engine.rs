//! The grid state engine.
//!
//! `GridEngine` owns the query, layout, selection, focus, edit and drag
//! state of one grid and mediates every change to it. After each change
//! that takes effect the focus is re-clamped to the displayed grid and the
//! persisted state is saved.

use std::collections::HashMap;

use crate::config::GridConfig;
use crate::derive::derive_rows;
use crate::edit::{EditSession, parse_input};
use crate::error::{EditError, LayoutError};
use crate::focus::{FocusCell, FocusNavigator, Key, Modifiers};
use crate::layout::{DragEnd, DragKind, DragOutcome, DragSession, LayoutSpec};
use crate::model::{ColumnDescriptor, ColumnRegistry, Record};
use crate::persist::{GridSnapshot, StatePersistence};
use crate::query::{FilterSpec, QueryState, SortDirection, SortSpec};
use crate::selection::{RowSelection, SelectAllState};
use crate::settings::SettingsProvider;
use crate::store::RecordStore;
use crate::totals::{ColumnTotal, column_totals};

/// Sort marker for a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortIndicator {
    /// Direction of the column's key.
    pub direction: SortDirection,
    /// 1-based priority, only reported when several keys are active.
    pub priority: Option<usize>,
}

/// Actions offered by a column header's context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAction {
    SortAscending,
    SortDescending,
    Hide,
}

/// What the engine did with a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// The key was not used; the caller may handle it.
    Ignored,
    /// Focus moved, was cleared, or the edit buffer changed.
    Handled,
    /// An inline edit started on the focused cell.
    EditStarted,
    /// The edit was saved; holds the patched record.
    EditCommitted(Record),
    /// The edit was discarded.
    EditCancelled,
    /// The edit could not be saved and is still open.
    EditRejected(EditError),
}

/// Owns and mutates the presentation state of one grid.
pub struct GridEngine<S: RecordStore> {
    registry: ColumnRegistry,
    config: GridConfig,
    store: S,
    query: QueryState,
    layout: LayoutSpec,
    selection: RowSelection,
    navigator: FocusNavigator,
    edit: Option<EditSession>,
    drag: Option<DragSession>,
    persistence: StatePersistence,
}

impl<S: RecordStore> GridEngine<S> {
    /// Create an engine and restore its persisted state.
    ///
    /// Stored state is merged over the registry defaults and repaired
    /// against the registry; it never prevents construction.
    pub fn new(registry: ColumnRegistry, store: S, settings: SettingsProvider, config: GridConfig) -> Self {
        let persistence = StatePersistence::new(settings, config.storage_key.clone());
        let snapshot = persistence.load(GridSnapshot::defaults(&registry));
        let (mut query, mut layout, selection) = snapshot.into_parts();
        query.reconcile(&registry);
        layout.reconcile(&registry, config.min_column_width, config.max_column_width);

        Self {
            registry,
            config,
            store,
            query,
            layout,
            selection,
            navigator: FocusNavigator::new(),
            edit: None,
            drag: None,
            persistence,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn registry(&self) -> &ColumnRegistry {
        &self.registry
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sort_spec(&self) -> &SortSpec {
        &self.query.sort
    }

    pub fn filter_spec(&self) -> &FilterSpec {
        &self.query.filter
    }

    pub fn layout(&self) -> &LayoutSpec {
        &self.layout
    }

    pub fn selection(&self) -> &RowSelection {
        &self.selection
    }

    /// Capture the state that is persisted.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::from_parts(&self.query, &self.layout, &self.selection)
    }

    /// Change records through the store, then re-clamp focus.
    ///
    /// An open edit whose record disappeared is dropped.
    pub fn update_store<R>(&mut self, f: impl FnOnce(&mut S) -> R) -> R {
        let result = f(&mut self.store);
        let edit_lost = self
            .edit
            .as_ref()
            .is_some_and(|edit| self.store.get(&edit.record_id).is_none());
        if edit_lost {
            self.edit = None;
        }
        self.revalidate_focus();
        result
    }

    // -------------------------------------------------------------------------
    // Derived rows and columns
    // -------------------------------------------------------------------------

    /// Filtered and sorted records in display order.
    pub fn displayed_rows(&self) -> Vec<Record> {
        let records = self.store.list();
        derive_rows(&records, &self.query.filter, &self.query.sort, &self.registry)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Ids of the displayed rows, in display order.
    pub fn displayed_ids(&self) -> Vec<String> {
        self.displayed_rows()
            .into_iter()
            .map(|r| r.id().to_string())
            .collect()
    }

    /// Number of displayed rows.
    pub fn row_count(&self) -> usize {
        let records = self.store.list();
        derive_rows(&records, &self.query.filter, &self.query.sort, &self.registry).len()
    }

    /// Visible column descriptors in display order.
    pub fn displayed_columns(&self) -> Vec<&ColumnDescriptor> {
        self.layout
            .displayed_columns()
            .iter()
            .filter_map(|id| self.registry.get(id))
            .collect()
    }

    /// Number of displayed columns.
    pub fn column_count(&self) -> usize {
        self.displayed_columns().len()
    }

    /// Width of a column, falling back to the configured default.
    pub fn column_width(&self, column_id: &str) -> u32 {
        self.layout.width(column_id, self.config.default_column_width)
    }

    /// Footer totals for the displayed rows and columns.
    pub fn totals(&self) -> Vec<(String, ColumnTotal)> {
        column_totals(&self.displayed_rows(), &self.displayed_columns())
    }

    // -------------------------------------------------------------------------
    // Sort and filter
    // -------------------------------------------------------------------------

    /// Advance the sort cycle of a sortable column.
    pub fn toggle_sort(&mut self, column_id: &str, multi_key: bool) -> bool {
        let changed = self.query.toggle_sort(&self.registry, column_id, multi_key);
        self.commit(changed)
    }

    /// Sort by one column in a fixed direction.
    pub fn set_sort(&mut self, column_id: &str, direction: SortDirection) -> bool {
        let changed = self.query.set_sort(&self.registry, column_id, direction);
        self.commit(changed)
    }

    /// Return to natural order.
    pub fn clear_sort(&mut self) -> bool {
        let changed = !self.query.sort.is_empty();
        self.query.sort.clear();
        self.commit(changed)
    }

    /// Set or clear a column filter; empty or `"all"` clears it.
    pub fn set_filter(&mut self, column_id: &str, raw: &str) -> bool {
        let changed = self.query.set_filter(column_id, raw);
        self.commit(changed)
    }

    /// Remove every filter.
    pub fn clear_filters(&mut self) -> bool {
        let changed = !self.query.filter.is_empty();
        self.query.filter.clear();
        self.commit(changed)
    }

    /// Header sort marker for a column.
    pub fn sort_indicator(&self, column_id: &str) -> Option<SortIndicator> {
        let sort = &self.query.sort;
        let index = sort.position(column_id)?;
        Some(SortIndicator {
            direction: sort.keys()[index].direction,
            priority: (sort.len() > 1).then_some(index + 1),
        })
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    /// Toggle a column's visibility. Returns the new visibility, or `None`
    /// for an unknown column.
    pub fn toggle_column_visibility(&mut self, column_id: &str) -> Option<bool> {
        let visible = self.layout.toggle_visible(column_id);
        self.commit(visible.is_some());
        visible
    }

    /// Make every column visible.
    pub fn show_all_columns(&mut self) -> bool {
        let changed = self.layout.show_all();
        self.commit(changed)
    }

    /// Replace the column order; rejects anything but a permutation of the
    /// known column ids and keeps the previous order.
    pub fn reorder_columns(&mut self, new_order: &[String]) -> Result<(), LayoutError> {
        if let Err(e) = self.layout.reorder(&self.registry, new_order) {
            log::warn!("rejected column order: {e}");
            return Err(e);
        }
        self.commit(true);
        Ok(())
    }

    /// Move a column to another slot of the full column order.
    pub fn move_column(&mut self, column_id: &str, index: usize) -> Result<(), LayoutError> {
        match self.layout.moved(column_id, index) {
            Some(order) if order != self.layout.order => self.reorder_columns(&order),
            _ => Ok(()),
        }
    }

    /// Store a column width, clamped to the configured bounds.
    pub fn resize_column(&mut self, column_id: &str, width: u32) -> u32 {
        let previous = self.layout.widths.get(column_id).copied();
        let stored = self.layout.resize(
            column_id,
            width,
            self.config.min_column_width,
            self.config.max_column_width,
        );
        self.commit(previous != Some(stored));
        stored
    }

    /// Apply a header context-menu action.
    pub fn apply_column_action(&mut self, column_id: &str, action: ColumnAction) -> bool {
        match action {
            ColumnAction::SortAscending => self.set_sort(column_id, SortDirection::Asc),
            ColumnAction::SortDescending => self.set_sort(column_id, SortDirection::Desc),
            ColumnAction::Hide => {
                if !self.layout.is_visible(column_id) {
                    return false;
                }
                self.toggle_column_visibility(column_id) == Some(false)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Drag sessions
    // -------------------------------------------------------------------------

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The active drag session.
    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Start dragging a column's resize handle at pointer offset `x`.
    ///
    /// Any active session is ended as lost first.
    pub fn begin_resize(&mut self, column_id: &str, x: i64) {
        self.end_drag(DragEnd::PointerLost);
        let start_width = self.column_width(column_id);
        log::debug!("resize drag started on {column_id} at {x} ({start_width}px)");
        self.drag = Some(DragSession::resize(column_id, start_width, x));
    }

    /// Start dragging a column header at pointer offset `x`.
    ///
    /// Any active session is ended as lost first.
    pub fn begin_reorder(&mut self, column_id: &str, x: i64) {
        self.end_drag(DragEnd::PointerLost);
        log::debug!("reorder drag started on {column_id} at {x}");
        self.drag = Some(DragSession::reorder(column_id, x));
    }

    /// Feed a pointer move to the active session.
    ///
    /// Resize sessions apply the new width immediately; reorder sessions
    /// track the displayed column under the pointer.
    pub fn update_drag(&mut self, x: i64) {
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        session.update(x);

        match session.kind().clone() {
            DragKind::Resize { column_id, .. } => {
                if let Some(width) = session.proposed_width(self.config.min_column_width) {
                    self.resize_column(&column_id, width);
                }
            }
            DragKind::Reorder { .. } => {
                let target = self.layout.column_at_x(x, self.config.default_column_width);
                session.set_target(target);
            }
        }
    }

    /// Finish the active session. Returns `None` if there was none.
    ///
    /// A reorder is only committed on [`DragEnd::Released`].
    pub fn end_drag(&mut self, how: DragEnd) -> Option<DragOutcome> {
        let session = self.drag.take()?;
        log::debug!("drag on {} ended ({how:?})", session.column_id());

        let outcome = match (session.kind().clone(), how) {
            (DragKind::Resize { column_id, .. }, _) => {
                let width = self.column_width(&column_id);
                DragOutcome::Resized { column_id, width }
            }
            (
                DragKind::Reorder {
                    column_id,
                    target: Some(target),
                },
                DragEnd::Released,
            ) if target != column_id => {
                let index = self.layout.order.iter().position(|id| *id == target);
                match index.map(|i| self.move_column(&column_id, i)) {
                    Some(Ok(())) => DragOutcome::Reordered { column_id, target },
                    _ => DragOutcome::Cancelled,
                }
            }
            _ => DragOutcome::Cancelled,
        };
        Some(outcome)
    }

    // -------------------------------------------------------------------------
    // Selection and expansion
    // -------------------------------------------------------------------------

    /// Toggle a row's selection. Returns `true` if it is now selected.
    pub fn toggle_row_selection(&mut self, id: &str) -> bool {
        let selected = self.selection.toggle_selected(id);
        self.commit(true);
        selected
    }

    /// Toggle a row's expansion. Returns `true` if it is now expanded.
    pub fn toggle_row_expansion(&mut self, id: &str) -> bool {
        let expanded = self.selection.toggle_expanded(id);
        self.commit(true);
        expanded
    }

    /// Select exactly the displayed rows (`checked`) or none.
    pub fn select_all(&mut self, checked: bool) -> bool {
        let displayed = self.displayed_ids();
        let changed = self
            .selection
            .select_all(checked, displayed.iter().map(String::as_str));
        self.commit(changed)
    }

    /// Empty the selection.
    pub fn clear_selection(&mut self) -> bool {
        let changed = self.selection.clear_selection();
        self.commit(changed)
    }

    /// Header checkbox state for the displayed rows.
    pub fn select_all_state(&self) -> SelectAllState {
        let displayed = self.displayed_ids();
        self.selection
            .select_all_state(displayed.iter().map(String::as_str))
    }

    /// Selected records that still exist, in natural order.
    pub fn selected_records(&self) -> Vec<Record> {
        self.store
            .list()
            .into_iter()
            .filter(|r| self.selection.is_selected(r.id()))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    /// The focused cell.
    pub fn focus(&self) -> Option<FocusCell> {
        self.navigator.focus()
    }

    /// Whether the displayed cell at `row`, `col` holds the focus.
    pub fn is_focused(&self, row: usize, col: usize) -> bool {
        self.navigator.is_focused(row, col)
    }

    /// Focus a cell, clamped into the displayed grid.
    pub fn set_focus(&mut self, cell: FocusCell) {
        let (rows, cols) = (self.row_count(), self.column_count());
        self.navigator.set_focus(cell, rows, cols);
    }

    /// Clear focus.
    pub fn clear_focus(&mut self) {
        self.navigator.clear();
    }

    /// Record under the focus.
    pub fn focused_record(&self) -> Option<Record> {
        let cell = self.navigator.focus()?;
        self.displayed_rows().into_iter().nth(cell.row)
    }

    /// Column under the focus.
    pub fn focused_column(&self) -> Option<&ColumnDescriptor> {
        let cell = self.navigator.focus()?;
        self.displayed_columns().get(cell.col).copied()
    }

    /// Route a key press to the edit session or the focus navigator.
    ///
    /// While editing, Enter commits, Escape cancels and text keys edit
    /// the buffer. Otherwise Enter starts an edit on the focused cell and
    /// navigation keys move the focus.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> KeyOutcome {
        if self.edit.is_some() {
            return self.handle_edit_key(key);
        }
        if key == Key::Enter && self.navigator.focus().is_some() {
            return match self.begin_edit() {
                Ok(()) => KeyOutcome::EditStarted,
                Err(e) => {
                    log::debug!("edit not started: {e}");
                    KeyOutcome::Ignored
                }
            };
        }
        let (rows, cols) = (self.row_count(), self.column_count());
        if self.navigator.handle_key(key, modifiers, rows, cols) {
            KeyOutcome::Handled
        } else {
            KeyOutcome::Ignored
        }
    }

    fn handle_edit_key(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Enter => match self.commit_edit() {
                Ok(record) => KeyOutcome::EditCommitted(record),
                Err(e) => KeyOutcome::EditRejected(e),
            },
            Key::Escape => {
                self.cancel_edit();
                KeyOutcome::EditCancelled
            }
            Key::Backspace => {
                if let Some(edit) = self.edit.as_mut() {
                    edit.backspace();
                }
                KeyOutcome::Handled
            }
            Key::Char(c) => {
                if let Some(edit) = self.edit.as_mut() {
                    edit.push(c);
                }
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        }
    }

    fn revalidate_focus(&mut self) {
        let (rows, cols) = (self.row_count(), self.column_count());
        if self.navigator.revalidate(rows, cols) && self.navigator.focus().is_none() {
            self.edit = None;
        }
    }

    // -------------------------------------------------------------------------
    // Inline edit
    // -------------------------------------------------------------------------

    /// The open edit session.
    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Start editing the focused cell.
    pub fn begin_edit(&mut self) -> Result<(), EditError> {
        let record = self.focused_record().ok_or(EditError::NoFocus)?;
        let column = self.focused_column().ok_or(EditError::NoFocus)?;
        if !column.editable {
            return Err(EditError::NotEditable(column.id.clone()));
        }
        let session = EditSession::new(record.id(), &column.id, record.value(&column.id).clone());
        log::debug!("editing {}.{}", session.record_id, session.column_id);
        self.edit = Some(session);
        Ok(())
    }

    /// Replace the edit buffer.
    pub fn set_edit_buffer(&mut self, text: &str) -> Result<(), EditError> {
        let edit = self.edit.as_mut().ok_or(EditError::NotEditing)?;
        edit.set_buffer(text);
        Ok(())
    }

    /// Parse the buffer and patch the record store.
    ///
    /// On error the session stays open so the input can be corrected.
    pub fn commit_edit(&mut self) -> Result<Record, EditError> {
        let edit = self.edit.as_ref().ok_or(EditError::NotEditing)?;
        let column = self
            .registry
            .get(&edit.column_id)
            .ok_or_else(|| EditError::NotEditable(edit.column_id.clone()))?;
        let value = parse_input(column, &edit.buffer)?;

        let updates = HashMap::from([(edit.column_id.clone(), value)]);
        let record_id = edit.record_id.clone();
        let result = self.store.patch(&record_id, updates);
        if let Err(e) = &result {
            log::warn!("patch of {record_id} failed: {e}");
            if self.store.get(&record_id).is_none() {
                self.edit = None;
                self.revalidate_focus();
            }
        }
        let record = result?;
        self.edit = None;
        self.revalidate_focus();
        Ok(record)
    }

    /// Discard the edit session.
    pub fn cancel_edit(&mut self) -> bool {
        self.edit.take().is_some()
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    /// Revalidate focus and save after a change; returns `changed`.
    fn commit(&mut self, changed: bool) -> bool {
        if changed {
            self.revalidate_focus();
            self.save();
        }
        changed
    }

    /// Save the current state. Failures are logged and otherwise ignored;
    /// the in-memory state stays authoritative.
    fn save(&self) {
        if let Err(e) = self.persistence.save(&self.snapshot()) {
            log::warn!(
                "failed to persist grid state under {}: {e}",
                self.persistence.key()
            );
        }
    }
}

impl<S: RecordStore + std::fmt::Debug> std::fmt::Debug for GridEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridEngine")
            .field("store", &self.store)
            .field("query", &self.query)
            .field("layout", &self.layout)
            .field("selection", &self.selection)
            .field("focus", &self.navigator.focus())
            .field("edit", &self.edit)
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}
