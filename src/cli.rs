// src/cli.rs
use std::error::Error;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::config::options::{AppOptions, Source};
use crate::prompt::{Decider, Fixed, NonInteractive, PromptDecider, SaveDecision, SaveMode};
use crate::runner::{self, RunSummary};

pub const HELP: &str = include_str!("cli_help.txt");

pub enum Command {
    Run(AppOptions),
    Help,
}

/// Parse arguments (program name already skipped).
pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AppOptions::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        let mut value = |name: &str| args.next().ok_or_else(|| format!("Missing value for {name}"));
        match a.as_str() {
            "-u" | "--url" => opts.fetch.source = Source::Url(value(&a)?),
            "--file" => opts.fetch.source = Source::File(PathBuf::from(value(&a)?)),
            "--user-agent" => opts.fetch.user_agent = value(&a)?,
            "--timeout" => {
                let secs = parse_positive(&a, &value(&a)?)?;
                opts.fetch.timeout = Duration::from_secs(secs as u64);
            }
            "--rows" => opts.preview.max_rows = parse_positive(&a, &value(&a)?)?,
            "--width" => opts.preview.max_width = parse_num(&a, &value(&a)?)?,
            "--max-tables" => opts.preview.max_tables = parse_positive(&a, &value(&a)?)?,
            "--no-color" => opts.color = false,
            "--save" => opts.save.mode = SaveMode::from_str(&value(&a)?)?,
            "-o" | "--out-dir" => opts.save.out_dir = PathBuf::from(value(&a)?),
            "--log" => opts.log_file = Some(PathBuf::from(value(&a)?)),
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(Command::Run(opts))
}

fn parse_num(flag: &str, v: &str) -> Result<usize, Box<dyn Error>> {
    v.trim()
        .parse::<usize>()
        .map_err(|e| format!("Invalid value for {flag}: '{v}' ({e})").into())
}

fn parse_positive(flag: &str, v: &str) -> Result<usize, Box<dyn Error>> {
    match parse_num(flag, v)? {
        0 => Err(format!("{flag} must be greater than 0").into()),
        n => Ok(n),
    }
}

/// Pick the decider for `mode`; `Ask` needs an interactive stdin.
pub fn decider_for(mode: SaveMode, interactive: bool) -> Box<dyn Decider> {
    match mode {
        SaveMode::All => Box::new(Fixed(SaveDecision::All)),
        SaveMode::None => Box::new(Fixed(SaveDecision::No)),
        SaveMode::Ask if interactive => Box::new(PromptDecider::new(io::stdin().lock())),
        SaveMode::Ask => Box::new(NonInteractive),
    }
}

/// Run against the real terminal: stdout for output, stdin for answers.
pub fn run(mut opts: AppOptions) -> Result<RunSummary, Box<dyn Error>> {
    if let Some(path) = &opts.log_file {
        if let Err(e) = crate::log::init(path) {
            eprintln!("Warning: could not open log file {}: {}", path.display(), e);
        }
    }

    let stdout = io::stdout();
    if !stdout.is_terminal() {
        opts.color = false;
    }

    let interactive = io::stdin().is_terminal();
    let mut decider = decider_for(opts.save.mode, interactive);

    let mut out = stdout.lock();
    let summary = runner::run(&opts, decider.as_mut(), &mut out)?;
    out.flush()?;
    Ok(summary)
}
