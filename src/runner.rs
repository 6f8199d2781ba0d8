// src/runner.rs
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use crate::{
    config::consts::RULE_WIDTH,
    config::options::AppOptions,
    core::{html, net},
    file::{save_table, timestamp, TablePaths},
    prompt::{Decider, SaveState},
    style::style_for,
    table::format_table,
};

pub const NO_TABLES_MSG: &str = "No <table> elements found. The site likely loads data via \
JavaScript; consider using the NBA stats API or Selenium.";

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub tables_found: usize,
    pub tables_shown: usize,
    pub files_written: Vec<PathBuf>,
    /// Files that could not be written.
    pub failures: usize,
}

/// Fetch → discover → preview → decide → save, once.
///
/// Fetch and discovery failures are reported on `out` and treated as
/// "no tables". File failures are reported per file and do not stop the run.
/// Only errors writing to `out` itself are returned.
pub fn run(
    opts: &AppOptions,
    decider: &mut dyn Decider,
    out: &mut dyn Write,
) -> Result<RunSummary, Box<dyn Error>> {
    let source = &opts.fetch.source;
    logf!("Run started: source={} save={}", source, opts.save.mode);

    let document = match net::load_document(&opts.fetch) {
        Ok(doc) => doc,
        Err(e) => {
            loge!("Fetch failed for {}: {}", source, e);
            writeln!(out, "Could not fetch {source}: {e}")?;
            s!()
        }
    };

    let tables = match html::discover_tables(&document) {
        Ok(tables) => tables,
        Err(e) => {
            loge!("Table discovery failed: {}", e);
            writeln!(out, "Could not parse document: {e}")?;
            Vec::new()
        }
    };

    let mut summary = RunSummary { tables_found: tables.len(), ..Default::default() };

    if tables.is_empty() {
        writeln!(out, "{NO_TABLES_MSG}")?;
        return Ok(summary);
    }

    let preview = &opts.preview;
    let mut state = SaveState::default();

    for (idx, found) in tables.iter().take(preview.max_tables).enumerate() {
        let idx = idx + 1;
        summary.tables_shown += 1;

        match found.title.as_deref() {
            Some(title) => {
                writeln!(out, "Table {}: {}", idx, style_for(idx).paint(title, opts.color))?
            }
            None => writeln!(out, "Table {idx}")?,
        }

        let lines = format_table(&found.table, preview.max_rows, preview.max_width);
        writeln!(out, "{}", lines.join("\n"))?;

        if state.verdict(idx, decider, out)? {
            let paths = TablePaths::new(&opts.save.out_dir, idx, found.title.as_deref(), &timestamp());
            let report = save_table(&paths, &found.table, &lines);

            if let Err(e) = &report.csv {
                loge!("CSV write failed for table {}: {}", idx, e);
                writeln!(out, "Could not write CSV for table {idx}: {e}")?;
                summary.failures += 1;
            }
            if let Err(e) = &report.txt {
                loge!("TXT write failed for table {}: {}", idx, e);
                writeln!(out, "Could not write TXT for table {idx}: {e}")?;
                summary.failures += 1;
            }

            let written = report.written();
            for (i, path) in written.iter().enumerate() {
                let label = if i == 0 { "Wrote: " } else { "       " };
                writeln!(out, "{label}{}", path.display())?;
                logf!("Wrote {}", path.display());
            }
            summary.files_written.extend(written.into_iter().map(PathBuf::from));
        } else {
            writeln!(out, "Skipped writing files for table {idx}.")?;
        }

        if state.skip_all {
            writeln!(out, "User selected skip all - exiting loop.")?;
            break;
        }

        writeln!(out, "\n{}\n", "=".repeat(RULE_WIDTH))?;
    }

    logf!(
        "Run finished: {} found, {} shown, {} files written, {} failures",
        summary.tables_found,
        summary.tables_shown,
        summary.files_written.len(),
        summary.failures
    );
    Ok(summary)
}
