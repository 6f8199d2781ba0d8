// src/prompt.rs
//! Per-table save decisions.
//!
//! A [`Decider`] answers "save table N?" with a [`SaveDecision`];
//! [`SaveState`] carries the sticky "all" / "skip all" answers across tables
//! and turns each decision into a plain save/skip verdict.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveDecision {
    Yes,
    No,
    /// Save this table and every remaining one without asking.
    All,
    /// Save nothing more and stop processing tables.
    SkipAll,
}

impl SaveDecision {
    /// Parse one line of user input. `None` for anything unrecognised.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => Some(SaveDecision::Yes),
            "n" | "no" | "" => Some(SaveDecision::No),
            "a" | "all" => Some(SaveDecision::All),
            "s" | "skip" | "skip all" => Some(SaveDecision::SkipAll),
            _ => None,
        }
    }
}

/// How saving is decided for the whole run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SaveMode {
    /// Ask per table (falls back to not saving without a terminal).
    #[default]
    Ask,
    All,
    None,
}

impl FromStr for SaveMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ask" | "p" | "per" => Ok(SaveMode::Ask),
            "all" | "a" => Ok(SaveMode::All),
            "none" | "n" => Ok(SaveMode::None),
            other => Err(format!("Unknown save mode: {other} (expected ask, all or none)")),
        }
    }
}

impl fmt::Display for SaveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SaveMode::Ask => "ask",
            SaveMode::All => "all",
            SaveMode::None => "none",
        })
    }
}

/// Source of per-table decisions. `idx` is 1-based.
/// Any user-facing text goes to `out`.
pub trait Decider {
    fn decide(&mut self, idx: usize, out: &mut dyn Write) -> io::Result<SaveDecision>;
}

/// Same answer for every table.
pub struct Fixed(pub SaveDecision);

impl Decider for Fixed {
    fn decide(&mut self, _idx: usize, _out: &mut dyn Write) -> io::Result<SaveDecision> {
        Ok(self.0)
    }
}

/// No input channel: never save.
pub struct NonInteractive;

impl Decider for NonInteractive {
    fn decide(&mut self, idx: usize, out: &mut dyn Write) -> io::Result<SaveDecision> {
        writeln!(out, "Non-interactive mode: not saving table {idx}.")?;
        Ok(SaveDecision::No)
    }
}

/// Asks on `out`, reads answers line by line from `input` until one parses.
pub struct PromptDecider<R> {
    input: R,
}

impl<R: BufRead> PromptDecider<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Decider for PromptDecider<R> {
    fn decide(&mut self, idx: usize, out: &mut dyn Write) -> io::Result<SaveDecision> {
        loop {
            write!(out, "Save table {idx} to files? (y/n/a=all/s=skip all): ")?;
            out.flush()?;

            let mut line = s!();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(out, "\nInput interrupted; skipping save for this table.")?;
                return Ok(SaveDecision::No);
            }

            match SaveDecision::parse(&line) {
                Some(decision) => return Ok(decision),
                None => writeln!(out, "Please type 'y', 'n', 'a' (all), or 's' (skip all).")?,
            }
        }
    }
}

/// Sticky answers across tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaveState {
    pub save_all: bool,
    pub skip_all: bool,
}

impl SaveState {
    /// Decide whether table `idx` is saved. Once "all" was answered the
    /// decider is not consulted again.
    pub fn verdict(
        &mut self,
        idx: usize,
        decider: &mut dyn Decider,
        out: &mut dyn Write,
    ) -> io::Result<bool> {
        if self.save_all {
            return Ok(true);
        }
        if self.skip_all {
            return Ok(false);
        }
        let decision = decider.decide(idx, out)?;
        logd!("Table {}: decision {:?}", idx, decision);
        Ok(match decision {
            SaveDecision::Yes => true,
            SaveDecision::No => false,
            SaveDecision::All => {
                self.save_all = true;
                writeln!(out, "Saving this and all remaining tables.")?;
                true
            }
            SaveDecision::SkipAll => {
                self.skip_all = true;
                writeln!(out, "Skipping all remaining saves.")?;
                false
            }
        })
    }
}
