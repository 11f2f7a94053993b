//! Text rendering of the grid.
//!
//! Rendering is a pure function of the application state and produces
//! styled lines; the terminal layer only writes them out.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use gridstate_lib::format::format_value;
use gridstate_lib::layout::DragKind;
use gridstate_lib::query::SortDirection;
use gridstate_lib::selection::SelectAllState;
use gridstate_lib::store::RecordStore;

use crate::app::{App, Mode};
use crate::deals::ROW_NOUN;

/// Column widths are stored in pixels; one terminal cell covers this many.
pub const PX_PER_CELL: u32 = 10;

/// Cells used by the selection checkbox and expander before the first column.
pub const ROW_PREFIX: u16 = 5;

/// Screen row of the column headers.
pub const HEADER_ROW: u16 = 1;

/// Lines used by the title, header, totals and status bar.
const CHROME_LINES: u16 = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub bold: bool,
    pub dim: bool,
    pub reverse: bool,
}

impl Style {
    pub const PLAIN: Self = Self {
        bold: false,
        dim: false,
        reverse: false,
    };
    pub const BOLD: Self = Self {
        bold: true,
        dim: false,
        reverse: false,
    };
    pub const DIM: Self = Self {
        bold: false,
        dim: true,
        reverse: false,
    };
    pub const REVERSE: Self = Self {
        bold: false,
        dim: false,
        reverse: true,
    };
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

pub type Line = Vec<Span>;

/// Concatenated text of a line.
pub fn line_text(line: &Line) -> String {
    line.iter().map(|s| s.text.as_str()).collect()
}

/// Terminal cells a column of `width_px` occupies.
pub fn cell_chars(width_px: u32) -> usize {
    (width_px / PX_PER_CELL).max(1) as usize
}

/// Body rows available for records at a terminal height.
pub fn body_height(height: u16) -> usize {
    height.saturating_sub(CHROME_LINES) as usize
}

/// Pad or truncate `text` to exactly `width` terminal cells.
pub fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return pad(text.to_string(), width);
    }
    if width == 0 {
        return String::new();
    }
    let (mut out, _) = take_width(text, width - 1);
    out.push('…');
    pad(out, width)
}

/// Longest prefix of `text` that fits in `max` cells, with its width.
fn take_width(text: &str, max: usize) -> (String, usize) {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    (out, used)
}

fn pad(mut text: String, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    text.extend(std::iter::repeat_n(' ', fill));
    text
}

/// Render the whole screen.
pub fn render<S: RecordStore>(app: &App<S>, width: u16, height: u16) -> Vec<Line> {
    let engine = app.engine();
    let rows = engine.displayed_rows();
    let columns = engine.displayed_columns();
    let width = width as usize;

    let mut lines = Vec::with_capacity(height as usize);
    lines.push(title_line(app, rows.len()));

    // Header
    let mut header = vec![Span::new(
        match engine.select_all_state() {
            SelectAllState::Checked => "[x]  ",
            SelectAllState::Indeterminate => "[-]  ",
            SelectAllState::Unchecked => "[ ]  ",
        },
        Style::BOLD,
    )];
    let dragged = engine.drag().map(|d| d.column_id().to_string());
    for column in &columns {
        let mut label = column.label.clone();
        if let Some(indicator) = engine.sort_indicator(&column.id) {
            label.push(match indicator.direction {
                SortDirection::Asc => '▲',
                SortDirection::Desc => '▼',
            });
            if let Some(priority) = indicator.priority {
                label.push_str(&priority.to_string());
            }
        }
        if let Some(needle) = engine.filter_spec().get(&column.id) {
            label.push_str(&format!(" ~{needle}"));
        }
        let style = if dragged.as_deref() == Some(column.id.as_str()) {
            Style::REVERSE
        } else {
            Style::BOLD
        };
        let cells = cell_chars(engine.column_width(&column.id));
        header.push(Span::new(fit(&label, cells.saturating_sub(1)), style));
        header.push(Span::new("│", Style::DIM));
    }
    lines.push(header);

    // Body
    let body = body_height(height);
    let mut used = 0;
    for (row_index, record) in rows.iter().enumerate().skip(app.scroll()) {
        if used >= body {
            break;
        }
        let selected = engine.selection().is_selected(record.id());
        let expanded = engine.selection().is_expanded(record.id());
        let mut line = vec![Span::new(
            format!(
                "{}{} ",
                if selected { "[x]" } else { "[ ]" },
                if expanded { '-' } else { '+' }
            ),
            Style::PLAIN,
        )];
        for (col_index, column) in columns.iter().enumerate() {
            let cells = cell_chars(engine.column_width(&column.id));
            let is_focused = engine.is_focused(row_index, col_index);
            let text = match engine.edit_session() {
                Some(edit)
                    if is_focused
                        && edit.record_id == record.id()
                        && edit.column_id == column.id =>
                {
                    format!("{}_", edit.buffer)
                }
                _ => format_value(record.value(&column.id), column.value_type),
            };
            let style = match (is_focused, selected) {
                (true, _) => Style::REVERSE,
                (false, true) => Style::BOLD,
                (false, false) => Style::PLAIN,
            };
            line.push(Span::new(fit(&text, cells.saturating_sub(1)), style));
            line.push(Span::new("│", Style::DIM));
        }
        lines.push(line);
        used += 1;

        if expanded && used < body {
            lines.push(vec![Span::new(detail_text(record), Style::DIM)]);
            used += 1;
        }
    }
    while used < body {
        lines.push(Vec::new());
        used += 1;
    }

    // Totals
    let mut totals = vec![Span::new(" ".repeat(ROW_PREFIX as usize), Style::PLAIN)];
    for (column_id, total) in engine.totals() {
        let cells = cell_chars(engine.column_width(&column_id));
        totals.push(Span::new(fit(&total.display(ROW_NOUN), cells), Style::BOLD));
    }
    lines.push(totals);

    lines.push(vec![status_span(app)]);

    for line in &mut lines {
        clip(line, width);
    }
    lines
}

fn title_line<S: RecordStore>(app: &App<S>, shown: usize) -> Line {
    let engine = app.engine();
    let total = engine.store().list().len();
    let selected = engine.selected_records().len();
    let mut text = format!("Deals pipeline | {shown} of {total} {ROW_NOUN} | {selected} selected");
    if let Some(DragKind::Resize { column_id, .. }) = engine.drag().map(|d| d.kind()) {
        text.push_str(&format!(" | resizing {column_id}"));
    }
    vec![Span::new(text, Style::BOLD)]
}

fn detail_text(record: &gridstate_lib::model::Record) -> String {
    let mut fields: Vec<_> = record
        .fields()
        .iter()
        .filter_map(|(k, v)| v.value_type().map(|t| (k, format_value(v, t))))
        .collect();
    fields.sort();
    let parts: Vec<String> = fields.iter().map(|(k, v)| format!("{k}: {v}")).collect();
    format!("      {}", parts.join("  "))
}

fn status_span<S: RecordStore>(app: &App<S>) -> Span {
    match app.mode() {
        Mode::Filter { column_id, buffer } => {
            Span::new(format!("filter {column_id}: {buffer}_"), Style::REVERSE)
        }
        Mode::Normal if !app.status().is_empty() => Span::new(app.status(), Style::PLAIN),
        Mode::Normal => Span::new(
            "arrows move  enter edit  s/S sort  / filter  space select  a all  x expand  h hide  v show  </> move  -/+ width  q quit",
            Style::DIM,
        ),
    }
}

/// Truncate a line to `width` terminal cells.
fn clip(line: &mut Line, width: usize) {
    let mut remaining = width;
    line.retain_mut(|span| {
        if remaining == 0 {
            return false;
        }
        let (text, used) = take_width(&span.text, remaining);
        if text.len() < span.text.len() {
            span.text = text;
            remaining = 0;
        } else {
            remaining -= used;
        }
        true
    });
}
