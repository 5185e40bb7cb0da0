//! Trains - route queries over a weighted rail network
//!
//! Answers route distance, shortest route and route enumeration queries
//! for a graph given inline, in a file, or through `trains.toml`.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{usage, Cli, OutputFormat};
use trains_core::error::{ExitCode as TrainsExitCode, TrainsError};
use trains_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(TrainsExitCode::Success as u8),
        Err(e) => report_failure(&cli, &e),
    }
}

fn report_failure(cli: &Cli, err: &TrainsError) -> ExitCode {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", err.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", err);
    }
    ExitCode::from(err.exit_code() as u8)
}

/// Clap runs before `--format` is known, so a JSON request is read from
/// argv and the failure reported in the error envelope
fn report_parse_failure(err: clap::Error) -> ExitCode {
    if !usage::argv_requests_json(env::args().skip(1)) {
        err.exit();
    }
    match usage::parse_failure(&err) {
        Some(failure) => {
            eprintln!("{}", failure.to_json());
            ExitCode::from(failure.exit_code() as u8)
        }
        None => err.exit(),
    }
}
