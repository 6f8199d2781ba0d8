// src/csv.rs
use std::io::{self, Write};

pub const SEP: char = ',';

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer. Fields are quoted only when needed.
/// A row of one empty field is written as `""` so it is not read back as a blank line.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    if let [only] = row {
        if only.is_empty() {
            return writeln!(w, "\"\"");
        }
    }
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write every row, in order.
pub fn write_rows<W: Write>(mut w: W, rows: &[Vec<String>], sep: char) -> io::Result<()> {
    for row in rows {
        write_row(&mut w, row, sep)?;
    }
    w.flush()
}
