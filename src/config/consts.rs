// src/config/consts.rs

// Net config
pub const DEFAULT_URL: &str = "https://www.nba.com/stats";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const MAX_BODY_BYTES: u64 = 50 * 1024 * 1024;

// Preview
pub const DEFAULT_MAX_ROWS: usize = 10;
pub const DEFAULT_MAX_WIDTH: usize = 30;
pub const DEFAULT_MAX_TABLES: usize = 9;
pub const RULE_WIDTH: usize = 80;

// Export
pub const DEFAULT_OUT_DIR: &str = "output";
pub const TIMESTAMP_FMT: &str = "%Y%m%d_%H%M%S";

// Logging
pub const DEFAULT_LOG_FILE: &str = ".table_scrape/debug.log";
