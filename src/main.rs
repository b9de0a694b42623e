mod add_cmd;
mod cli;
mod config;
mod convert;
mod logging;
mod period_cmd;
mod span_cmd;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    debug!(
        zone = %config.defaults.zone,
        frequency = %config.period.frequency,
        "configuration loaded"
    );
    match &cli.command {
        Command::Period(args) => period_cmd::run(args, &config),
        Command::Add(args) => add_cmd::run(args, &config),
        Command::Span(args) => span_cmd::run(args, &config),
    }
}
