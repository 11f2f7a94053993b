//! Column layout: visibility, display order and pixel widths.

mod drag;

pub use drag::*;

use std::collections::{HashMap, HashSet};

use crate::error::{LayoutError, OrderViolation};
use crate::model::ColumnRegistry;

/// User-adjustable column presentation.
///
/// `order` always holds every known column id exactly once, hidden columns
/// included; `visible` only holds known ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutSpec {
    /// Ids of visible columns.
    pub visible: HashSet<String>,
    /// Display order of all columns.
    pub order: Vec<String>,
    /// Stored widths in pixels.
    pub widths: HashMap<String, u32>,
}

impl LayoutSpec {
    /// Default layout: every column visible, in registry order.
    pub fn from_registry(registry: &ColumnRegistry) -> Self {
        let ids = registry.ids();
        Self {
            visible: ids.iter().cloned().collect(),
            order: ids,
            widths: HashMap::new(),
        }
    }

    /// Visible column ids in display order.
    pub fn displayed_columns(&self) -> Vec<String> {
        self.order
            .iter()
            .filter(|id| self.visible.contains(*id))
            .cloned()
            .collect()
    }

    /// Returns `true` if the column is visible.
    pub fn is_visible(&self, column_id: &str) -> bool {
        self.visible.contains(column_id)
    }

    /// Toggle a known column's visibility.
    ///
    /// Hiding the last visible column is allowed. Returns the new
    /// visibility, or `None` for an unknown column.
    pub fn toggle_visible(&mut self, column_id: &str) -> Option<bool> {
        if !self.order.iter().any(|id| id == column_id) {
            return None;
        }
        if self.visible.remove(column_id) {
            Some(false)
        } else {
            self.visible.insert(column_id.to_string());
            Some(true)
        }
    }

    /// Make every column visible. Returns `true` if anything changed.
    pub fn show_all(&mut self) -> bool {
        let before = self.visible.len();
        self.visible.extend(self.order.iter().cloned());
        self.visible.len() != before
    }

    /// Replace the column order wholesale.
    ///
    /// The new order must be a permutation of the registry's column ids;
    /// otherwise the current order is kept and the violation returned.
    pub fn reorder(&mut self, registry: &ColumnRegistry, new_order: &[String]) -> Result<(), LayoutError> {
        let violation = check_permutation(registry, new_order);
        if !violation.is_empty() {
            return Err(LayoutError::InvalidOrder(violation));
        }
        self.order = new_order.to_vec();
        Ok(())
    }

    /// Order with `column_id` moved to `index` (clamped to the last slot).
    pub fn moved(&self, column_id: &str, index: usize) -> Option<Vec<String>> {
        let from = self.order.iter().position(|id| id == column_id)?;
        let mut order = self.order.clone();
        let id = order.remove(from);
        let to = index.min(order.len());
        order.insert(to, id);
        Some(order)
    }

    /// Store a width, clamped into `min_width..=max_width`. Returns the
    /// stored width.
    pub fn resize(&mut self, column_id: &str, width: u32, min_width: u32, max_width: u32) -> u32 {
        let width = clamp_width(width, min_width, max_width);
        self.widths.insert(column_id.to_string(), width);
        width
    }

    /// Stored width, or `default_width` if none is stored.
    pub fn width(&self, column_id: &str, default_width: u32) -> u32 {
        self.widths.get(column_id).copied().unwrap_or(default_width)
    }

    /// Start offsets of the displayed columns, from the grid's left edge.
    pub fn column_positions(&self, default_width: u32) -> Vec<(String, u32)> {
        let mut positions = Vec::new();
        let mut x: u32 = 0;
        for id in self.displayed_columns() {
            let width = self.width(&id, default_width);
            positions.push((id, x));
            x = x.saturating_add(width);
        }
        positions
    }

    /// Displayed column under a horizontal pointer offset.
    ///
    /// Offsets left of the grid resolve to the first column and offsets
    /// past the right edge to the last.
    pub fn column_at_x(&self, x: i64, default_width: u32) -> Option<String> {
        let positions = self.column_positions(default_width);
        if positions.is_empty() {
            return None;
        }
        let x = u32::try_from(x.max(0)).unwrap_or(u32::MAX);
        let index = match positions.binary_search_by(|(_, start)| start.cmp(&x)) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        positions.into_iter().nth(index).map(|(id, _)| id)
    }

    /// Repair state loaded from storage against the registry.
    ///
    /// Unknown and duplicate ids are dropped from the order and missing
    /// ids appended in registry order; visibility keeps only known ids and
    /// widths are clamped.
    pub(crate) fn reconcile(&mut self, registry: &ColumnRegistry, min_width: u32, max_width: u32) {
        let mut seen = HashSet::new();
        let mut order: Vec<String> = self
            .order
            .iter()
            .filter(|id| registry.contains(id) && seen.insert((*id).clone()))
            .cloned()
            .collect();
        for id in registry.ids() {
            if !seen.contains(&id) {
                order.push(id);
            }
        }
        if order != self.order {
            log::warn!("repaired persisted column order {:?} -> {:?}", self.order, order);
            self.order = order;
        }

        self.visible.retain(|id| registry.contains(id));
        self.widths.retain(|id, _| registry.contains(id));
        for (id, width) in self.widths.iter_mut() {
            let clamped = clamp_width(*width, min_width, max_width);
            if clamped != *width {
                log::warn!("clamped persisted width of {id} from {width} to {clamped}");
                *width = clamped;
            }
        }
    }
}

/// Clamp a width into `min..=max`. A maximum below the minimum yields the
/// minimum.
fn clamp_width(width: u32, min: u32, max: u32) -> u32 {
    width.min(max).max(min)
}

/// Compare a proposed order against the registry's column ids.
fn check_permutation(registry: &ColumnRegistry, proposed: &[String]) -> OrderViolation {
    let mut violation = OrderViolation::default();
    let mut seen = HashSet::new();

    for id in proposed {
        if !registry.contains(id) {
            violation.unknown.push(id.clone());
        } else if !seen.insert(id.as_str()) {
            violation.duplicated.push(id.clone());
        }
    }
    violation.missing = registry
        .ids()
        .into_iter()
        .filter(|id| !seen.contains(id.as_str()))
        .collect();

    violation
}
