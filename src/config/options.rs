// src/config/options.rs
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::prompt::SaveMode;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub preview: PreviewOptions,
    pub save: SaveOptions,
    pub color: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            fetch: FetchOptions::default(),
            preview: PreviewOptions::default(),
            save: SaveOptions::default(),
            color: true,
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }
}

/// Where the document comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{url}"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub source: Source,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            source: Source::Url(s!(DEFAULT_URL)),
            user_agent: s!(DEFAULT_USER_AGENT),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewOptions {
    pub max_rows: usize,
    pub max_width: usize,
    pub max_tables: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            max_width: DEFAULT_MAX_WIDTH,
            max_tables: DEFAULT_MAX_TABLES,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveOptions {
    pub mode: SaveMode,
    pub out_dir: PathBuf,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            mode: SaveMode::Ask,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}
