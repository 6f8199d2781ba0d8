// src/table.rs
//! Table model and the aligned text preview renderer.
//!
//! All widths and lengths are counted in `char`s, never bytes.

use crate::config::consts::{DEFAULT_MAX_ROWS, DEFAULT_MAX_WIDTH};

const CELL_SEP: &str = " | ";
const RULE_SEP: &str = "-+-";
const ELLIPSIS: &str = "...";

/// A grid of text cells as extracted from a document.
///
/// `headers` holds the declared header cells (may be empty). Rows may be
/// ragged; the renderer pads them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Rows as written to CSV: declared headers first (if any), then every row as-is.
    pub fn csv_rows(&self) -> Vec<Vec<String>> {
        let mut out = Vec::with_capacity(self.rows.len() + 1);
        if !self.headers.is_empty() {
            out.push(self.headers.clone());
        }
        out.extend(self.rows.iter().cloned());
        out
    }

    /// Preview with the default bounds.
    pub fn preview(&self) -> Vec<String> {
        format_table(self, DEFAULT_MAX_ROWS, DEFAULT_MAX_WIDTH)
    }
}

/// Cut `value` to at most `width` chars, ending in `...` when shortened.
///
/// A shortened value is always exactly `width` chars long. Below 3 the
/// ellipsis itself is cut (`width == 2` → `".."`, `0` → `""`).
pub fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return s!(value);
    }
    let keep = width.saturating_sub(ELLIPSIS.len());
    value
        .chars()
        .take(keep)
        .chain(ELLIPSIS.chars())
        .take(width)
        .collect()
}

/// Left-justify `value` in `width` chars. Never shortens.
pub fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    let mut out = String::with_capacity(value.len() + width.saturating_sub(len));
    out.push_str(value);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(len)));
    out
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| pad(&truncate(cell, w), w))
        .collect::<Vec<_>>()
        .join(CELL_SEP)
}

fn normalize(cells: &[String], cols: usize) -> Vec<String> {
    let mut out = cells.to_vec();
    out.resize(cols, s!());
    out
}

/// Render `table` as display lines.
///
/// Output is `[header, separator]? + data lines + [notice]?`:
/// - without declared headers the first row is promoted to header;
/// - the header pair is emitted only if some header cell is non-empty;
/// - at most `max_rows` data lines, then `... (N more rows)` when rows were cut;
/// - each column is `min(max_width, longest cell)` wide.
///
/// Total for any input; an empty table renders as no lines.
pub fn format_table(table: &Table, max_rows: usize, max_width: usize) -> Vec<String> {
    let (headers, rows) = match table.rows.split_first() {
        Some((first, rest)) if table.headers.is_empty() => (first.as_slice(), rest),
        _ => (table.headers.as_slice(), table.rows.as_slice()),
    };

    let cols = rows.iter().map(Vec::len).fold(headers.len(), usize::max);
    if cols == 0 {
        return Vec::new();
    }

    let headers = normalize(headers, cols);
    let rows: Vec<Vec<String>> = rows.iter().map(|r| normalize(r, cols)).collect();

    let widths: Vec<usize> = (0..cols)
        .map(|i| {
            let longest = rows
                .iter()
                .map(|r| r[i].chars().count())
                .fold(headers[i].chars().count(), usize::max);
            longest.min(max_width)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len().min(max_rows) + 3);

    if headers.iter().any(|h| !h.is_empty()) {
        lines.push(render_line(&headers, &widths));
        lines.push(
            widths
                .iter()
                .map(|&w| "-".repeat(w))
                .collect::<Vec<_>>()
                .join(RULE_SEP),
        );
    }

    for row in rows.iter().take(max_rows) {
        lines.push(render_line(row, &widths));
    }

    if rows.len() > max_rows {
        lines.push(format!("... ({} more rows)", rows.len() - max_rows));
    }

    lines
}
