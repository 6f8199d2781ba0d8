// src/file.rs

use std::{
    error::Error,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::consts::TIMESTAMP_FMT;
use crate::core::sanitize::sanitize_title;
use crate::csv::{write_rows, SEP};
use crate::table::Table;

/// Output paths for one table: `<dir>/table_<idx>_<title>_<stamp>.{csv,txt}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TablePaths {
    pub csv: PathBuf,
    pub txt: PathBuf,
}

impl TablePaths {
    pub fn new(dir: &Path, idx: usize, title: Option<&str>, stamp: &str) -> Self {
        let stem = format!("table_{}_{}_{}", idx, sanitize_title(title, idx), stamp);
        Self {
            csv: dir.join(format!("{stem}.csv")),
            txt: dir.join(format!("{stem}.txt")),
        }
    }
}

/// Local time formatted for file names, e.g. `20240131_235959`.
pub fn timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FMT).to_string()
}

/// Outcome of saving one table. Each file succeeds or fails on its own.
pub struct SaveReport {
    pub csv: Result<PathBuf, Box<dyn Error>>,
    pub txt: Result<PathBuf, Box<dyn Error>>,
}

impl SaveReport {
    pub fn written(&self) -> Vec<&Path> {
        [&self.csv, &self.txt]
            .into_iter()
            .filter_map(|r| r.as_ref().ok().map(PathBuf::as_path))
            .collect()
    }
}

/// Write the table as CSV (declared headers, then rows) and its preview lines as TXT.
pub fn save_table(paths: &TablePaths, table: &Table, preview: &[String]) -> SaveReport {
    SaveReport {
        csv: write_csv(&paths.csv, table).map(|_| paths.csv.clone()),
        txt: write_txt(&paths.txt, preview).map(|_| paths.txt.clone()),
    }
}

pub fn write_csv(path: &Path, table: &Table) -> Result<(), Box<dyn Error>> {
    ensure_parent(path)?;
    let out = BufWriter::new(File::create(path)?);
    write_rows(out, &table.csv_rows(), SEP)?;
    Ok(())
}

/// Preview lines joined by `\n`, no trailing newline.
pub fn write_txt(path: &Path, lines: &[String]) -> Result<(), Box<dyn Error>> {
    ensure_parent(path)?;
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(lines.join("\n").as_bytes())?;
    out.flush()?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
