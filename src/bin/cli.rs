// src/bin/cli.rs
use color_eyre::eyre::eyre;
use table_scrape::cli::{self, Command};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let command = cli::parse_args(std::env::args().skip(1)).map_err(|e| eyre!("{e}"))?;
    match command {
        Command::Help => {
            eprintln!("{}", cli::HELP);
            Ok(())
        }
        Command::Run(opts) => {
            cli::run(opts).map_err(|e| eyre!("{e}"))?;
            Ok(())
        }
    }
}
