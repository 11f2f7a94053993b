//! Keyboard cell focus over the displayed grid.
//!
//! Focus is a (row, column) index pair into the *displayed* rows and
//! columns, not a record or column identity. The grid dimensions are
//! passed in on every call; the navigator only owns the cursor.

/// Key codes the grid reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Other,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

#[cfg(feature = "crossterm")]
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => Key::Other,
        }
    }
}

#[cfg(feature = "crossterm")]
impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

/// A focused cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusCell {
    pub row: usize,
    pub col: usize,
}

impl FocusCell {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Keyboard cursor over a rows × columns grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusNavigator {
    focus: Option<FocusCell>,
}

impl FocusNavigator {
    /// Create a navigator with no focus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the focused cell.
    pub fn focus(&self) -> Option<FocusCell> {
        self.focus
    }

    /// Check if a cell is focused.
    pub fn is_focused(&self, row: usize, col: usize) -> bool {
        self.focus == Some(FocusCell::new(row, col))
    }

    /// Focus a cell, clamped into the grid. An empty grid clears focus.
    pub fn set_focus(&mut self, cell: FocusCell, rows: usize, cols: usize) {
        self.focus = clamp(cell, rows, cols);
    }

    /// Clear focus.
    pub fn clear(&mut self) {
        self.focus = None;
    }

    /// Apply a navigation key.
    ///
    /// Returns `true` if the key was consumed. Keys other than arrows,
    /// Tab/BackTab and Escape are left for the caller.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers, rows: usize, cols: usize) -> bool {
        match key {
            Key::Up | Key::Down | Key::Left | Key::Right => {
                self.arrow(key, rows, cols);
                true
            }
            Key::Tab if modifiers.shift => {
                self.tab_backward(rows, cols);
                true
            }
            Key::Tab => {
                self.tab_forward(rows, cols);
                true
            }
            Key::BackTab => {
                self.tab_backward(rows, cols);
                true
            }
            Key::Escape => {
                self.focus = None;
                true
            }
            _ => false,
        }
    }

    /// Re-clamp focus after the grid changed size.
    ///
    /// Returns `true` if the focus moved or was cleared.
    pub fn revalidate(&mut self, rows: usize, cols: usize) -> bool {
        let Some(current) = self.focus else {
            return false;
        };
        let next = clamp(current, rows, cols);
        if next != self.focus {
            log::debug!("focus {current:?} revalidated to {next:?} for {rows}x{cols}");
            self.focus = next;
            return true;
        }
        false
    }

    fn arrow(&mut self, key: Key, rows: usize, cols: usize) {
        if rows == 0 || cols == 0 {
            self.focus = None;
            return;
        }
        // First arrow press only places the cursor
        let Some(current) = self.focus.and_then(|c| clamp(c, rows, cols)) else {
            self.focus = Some(FocusCell::ORIGIN);
            return;
        };
        let FocusCell { row, col } = current;
        let next = match key {
            Key::Up => FocusCell::new(row.saturating_sub(1), col),
            Key::Down => FocusCell::new((row + 1).min(rows - 1), col),
            Key::Left => FocusCell::new(row, col.saturating_sub(1)),
            Key::Right => FocusCell::new(row, (col + 1).min(cols - 1)),
            _ => current,
        };
        self.focus = Some(next);
    }

    fn tab_forward(&mut self, rows: usize, cols: usize) {
        if rows == 0 || cols == 0 {
            self.focus = None;
            return;
        }
        let FocusCell { row, col } = self
            .focus
            .and_then(|c| clamp(c, rows, cols))
            .unwrap_or(FocusCell::ORIGIN);
        if col + 1 < cols {
            self.focus = Some(FocusCell::new(row, col + 1));
        } else if row + 1 < rows {
            self.focus = Some(FocusCell::new(row + 1, 0));
        }
    }

    fn tab_backward(&mut self, rows: usize, cols: usize) {
        if rows == 0 || cols == 0 {
            self.focus = None;
            return;
        }
        let FocusCell { row, col } = self
            .focus
            .and_then(|c| clamp(c, rows, cols))
            .unwrap_or(FocusCell::ORIGIN);
        if col > 0 {
            self.focus = Some(FocusCell::new(row, col - 1));
        } else if row > 0 {
            self.focus = Some(FocusCell::new(row - 1, cols - 1));
        }
    }
}

fn clamp(cell: FocusCell, rows: usize, cols: usize) -> Option<FocusCell> {
    if rows == 0 || cols == 0 {
        return None;
    }
    Some(FocusCell::new(cell.row.min(rows - 1), cell.col.min(cols - 1)))
}
