// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;

pub mod csv;
pub mod file;
pub mod prompt;
pub mod runner;
pub mod style;
pub mod table;

pub use table::{format_table, Table};
