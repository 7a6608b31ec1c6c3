mod cli;
mod config;
mod convert_cmd;
mod inspect;
mod logging;
mod sample;
mod smooth;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(&cli.config)?;
    match cli.command {
        Command::Inspect(args) => inspect::run(args, &config),
        Command::Sample(args) => sample::run(args, &config),
        Command::Smooth(args) => smooth::run(args, &config),
        Command::Convert(args) => convert_cmd::run(args, &config),
    }
}
