//! Pointer drag sessions for column resize and reorder.
//!
//! A session lives from `begin` to `end`. The owner keeps at most one
//! session and takes it out on end, so a session can only finish once.

/// What a drag session is manipulating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragKind {
    /// Dragging a column's right edge.
    Resize {
        column_id: String,
        start_width: u32,
    },
    /// Dragging a column header to a new position.
    Reorder {
        column_id: String,
        /// Displayed column currently under the pointer.
        target: Option<String>,
    },
}

/// How a drag session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEnd {
    /// The pointer button was released normally.
    Released,
    /// The pointer left the window or the interaction was aborted.
    PointerLost,
}

/// Result of ending a drag session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// A resize finished; the width was applied during the drag.
    Resized { column_id: String, width: u32 },
    /// A reorder was committed.
    Reordered { column_id: String, target: String },
    /// The session ended without changing the layout.
    Cancelled,
}

/// An in-progress pointer drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    kind: DragKind,
    origin_x: i64,
    last_x: i64,
}

impl DragSession {
    /// Start a resize drag at pointer offset `x`.
    pub fn resize(column_id: impl Into<String>, start_width: u32, x: i64) -> Self {
        Self {
            kind: DragKind::Resize {
                column_id: column_id.into(),
                start_width,
            },
            origin_x: x,
            last_x: x,
        }
    }

    /// Start a reorder drag at pointer offset `x`.
    pub fn reorder(column_id: impl Into<String>, x: i64) -> Self {
        Self {
            kind: DragKind::Reorder {
                column_id: column_id.into(),
                target: None,
            },
            origin_x: x,
            last_x: x,
        }
    }

    /// What this session manipulates.
    pub fn kind(&self) -> &DragKind {
        &self.kind
    }

    /// The column being dragged.
    pub fn column_id(&self) -> &str {
        match &self.kind {
            DragKind::Resize { column_id, .. } | DragKind::Reorder { column_id, .. } => column_id,
        }
    }

    /// Horizontal distance travelled since `begin`.
    pub fn delta(&self) -> i64 {
        self.last_x.saturating_sub(self.origin_x)
    }

    /// Record a pointer move.
    pub fn update(&mut self, x: i64) {
        self.last_x = x;
    }

    /// Width a resize session proposes for the current pointer position.
    pub fn proposed_width(&self, min_width: u32) -> Option<u32> {
        match &self.kind {
            DragKind::Resize { start_width, .. } => {
                let width = i64::from(*start_width)
                    .saturating_add(self.delta())
                    .max(i64::from(min_width));
                Some(u32::try_from(width).unwrap_or(u32::MAX))
            }
            DragKind::Reorder { .. } => None,
        }
    }

    /// Set the hovered column of a reorder session.
    pub fn set_target(&mut self, column: Option<String>) {
        if let DragKind::Reorder { target, .. } = &mut self.kind {
            *target = column;
        }
    }
}
