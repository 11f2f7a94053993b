//! Application state and input handling.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use gridstate_lib::focus::{FocusCell, Key, Modifiers};
use gridstate_lib::layout::{DragEnd, DragOutcome};
use gridstate_lib::selection::SelectAllState;
use gridstate_lib::store::RecordStore;
use gridstate_lib::{GridEngine, KeyOutcome};

use crate::render::{HEADER_ROW, PX_PER_CELL, ROW_PREFIX};

/// Pixels change per resize key press.
const RESIZE_STEP: u32 = 10;

/// Input mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Typing a filter for a column.
    Filter { column_id: String, buffer: String },
}

/// The terminal grid application.
pub struct App<S: RecordStore> {
    engine: GridEngine<S>,
    mode: Mode,
    scroll: usize,
    status: String,
    quit: bool,
}

impl<S: RecordStore> App<S> {
    pub fn new(engine: GridEngine<S>) -> Self {
        Self {
            engine,
            mode: Mode::Normal,
            scroll: 0,
            status: String::new(),
            quit: false,
        }
    }

    pub fn engine(&self) -> &GridEngine<S> {
        &self.engine
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Keep the focused row inside a body of `body_rows` lines.
    pub fn scroll_to_focus(&mut self, body_rows: usize) {
        let rows = self.engine.row_count();
        self.scroll = self.scroll.min(rows.saturating_sub(1));
        let Some(focus) = self.engine.focus() else {
            return;
        };
        if focus.row < self.scroll {
            self.scroll = focus.row;
        } else if body_rows > 0 && focus.row >= self.scroll + body_rows {
            self.scroll = focus.row + 1 - body_rows;
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusLost => {
                self.engine.end_drag(DragEnd::PointerLost);
            }
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if matches!(self.mode, Mode::Filter { .. }) {
            self.handle_filter_key(key.code);
            return;
        }

        let outcome = self
            .engine
            .handle_key(Key::from(key.code), Modifiers::from(key.modifiers));
        match outcome {
            KeyOutcome::Ignored => {}
            KeyOutcome::Handled => return,
            KeyOutcome::EditStarted => {
                self.status = "editing: enter saves, esc cancels".to_string();
                return;
            }
            KeyOutcome::EditCommitted(record) => {
                self.status = format!("saved {}", record.id());
                return;
            }
            KeyOutcome::EditCancelled => {
                self.status = "edit cancelled".to_string();
                return;
            }
            KeyOutcome::EditRejected(e) => {
                self.status = e.to_string();
                return;
            }
        }

        if let KeyCode::Char(c) = key.code {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                if c == 'c' {
                    self.quit = true;
                }
                return;
            }
            self.handle_command(c);
        }
    }

    fn handle_command(&mut self, c: char) {
        self.status.clear();
        match c {
            'q' => self.quit = true,
            's' => self.sort_focused(false),
            'S' => self.sort_focused(true),
            ' ' => {
                if let Some(record) = self.engine.focused_record() {
                    self.engine.toggle_row_selection(record.id());
                }
            }
            'a' => {
                let checked = self.engine.select_all_state() != SelectAllState::Checked;
                self.engine.select_all(checked);
            }
            'x' => {
                if let Some(record) = self.engine.focused_record() {
                    self.engine.toggle_row_expansion(record.id());
                }
            }
            'h' => {
                if let Some(id) = self.focused_column_id() {
                    self.engine.toggle_column_visibility(&id);
                    self.status = format!("hid {id} (v shows all)");
                }
            }
            'v' => {
                self.engine.show_all_columns();
            }
            '<' => self.move_focused(-1),
            '>' => self.move_focused(1),
            '-' => self.resize_focused(false),
            '+' | '=' => self.resize_focused(true),
            '/' => self.start_filter(),
            _ => {}
        }
    }

    fn focused_column_id(&self) -> Option<String> {
        self.engine.focused_column().map(|c| c.id.clone())
    }

    fn sort_focused(&mut self, multi_key: bool) {
        let Some(id) = self.focused_column_id() else {
            return;
        };
        if !self.engine.toggle_sort(&id, multi_key) {
            self.status = format!("{id} is not sortable");
        }
    }

    /// Swap the focused column with its displayed neighbour.
    fn move_focused(&mut self, step: isize) {
        let Some(focus) = self.engine.focus() else {
            return;
        };
        let displayed: Vec<String> = self
            .engine
            .displayed_columns()
            .iter()
            .map(|c| c.id.clone())
            .collect();
        let Some(target) = focus
            .col
            .checked_add_signed(step)
            .and_then(|i| displayed.get(i))
        else {
            return;
        };
        let Some(index) = self.engine.layout().order.iter().position(|id| id == target) else {
            return;
        };
        let column_id = displayed[focus.col].clone();
        match self.engine.move_column(&column_id, index) {
            Ok(()) => {
                let col = focus.col.saturating_add_signed(step);
                self.engine.set_focus(FocusCell::new(focus.row, col));
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    fn resize_focused(&mut self, grow: bool) {
        let Some(id) = self.focused_column_id() else {
            return;
        };
        let current = self.engine.column_width(&id);
        let width = if grow {
            current.saturating_add(RESIZE_STEP)
        } else {
            current.saturating_sub(RESIZE_STEP)
        };
        let stored = self.engine.resize_column(&id, width);
        self.status = format!("{id}: {stored}px");
    }

    fn start_filter(&mut self) {
        let Some(column) = self.engine.focused_column() else {
            self.status = "focus a column to filter".to_string();
            return;
        };
        if !column.filterable {
            self.status = format!("{} cannot be filtered", column.id);
            return;
        }
        let buffer = self
            .engine
            .filter_spec()
            .get(&column.id)
            .unwrap_or_default()
            .to_string();
        self.mode = Mode::Filter {
            column_id: column.id.clone(),
            buffer,
        };
    }

    fn handle_filter_key(&mut self, code: KeyCode) {
        let Mode::Filter { column_id, buffer } = &mut self.mode else {
            return;
        };
        match code {
            KeyCode::Char(c) => buffer.push(c),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter => {
                let (column_id, buffer) = (column_id.clone(), buffer.clone());
                self.mode = Mode::Normal;
                self.engine.set_filter(&column_id, &buffer);
                self.status = match self.engine.filter_spec().get(&column_id) {
                    Some(needle) => format!("{column_id} contains \"{needle}\""),
                    None => format!("{column_id} filter cleared"),
                };
            }
            KeyCode::Esc => self.mode = Mode::Normal,
            _ => {}
        }
    }

    /// Header drags: near a column's right edge resizes, elsewhere reorders.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let x = (i64::from(mouse.column) - i64::from(ROW_PREFIX)) * i64::from(PX_PER_CELL);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if mouse.row == HEADER_ROW => {
                self.begin_header_drag(x);
            }
            MouseEventKind::Drag(MouseButton::Left) => self.engine.update_drag(x),
            MouseEventKind::Up(MouseButton::Left) => {
                match self.engine.end_drag(DragEnd::Released) {
                    Some(DragOutcome::Resized { column_id, width }) => {
                        self.status = format!("{column_id}: {width}px");
                    }
                    Some(DragOutcome::Reordered { column_id, target }) => {
                        self.status = format!("moved {column_id} to {target}");
                    }
                    Some(DragOutcome::Cancelled) | None => {}
                }
            }
            _ => {}
        }
    }

    fn begin_header_drag(&mut self, x: i64) {
        if x < 0 {
            return;
        }
        let default = self.engine.config().default_column_width;
        let layout = self.engine.layout();
        let hit = layout
            .column_positions(default)
            .into_iter()
            .map(|(id, start)| {
                let end = i64::from(start.saturating_add(layout.width(&id, default)));
                (id, i64::from(start), end)
            })
            .find(|(_, start, end)| x >= *start && x < *end);

        let Some((id, _, end)) = hit else {
            return;
        };
        if end - x <= i64::from(PX_PER_CELL) {
            self.engine.begin_resize(&id, x);
        } else {
            self.engine.begin_reorder(&id, x);
        }
    }
}
