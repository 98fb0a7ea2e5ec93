//! Linthold CLI - uniform static-analysis configuration for multi-module builds
//!
//! Usage: linthold <COMMAND>
//!
//! Commands:
//!   resolve  Resolve the analysis configuration of each module
//!   check    Evaluate a finding report against the thresholds
//!   catalog  Look up a version catalog entry
//!   modules  List the modules of the build

mod commands;

use std::process::ExitCode;

use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use linthold::presentation::output::error_json;
use linthold::presentation::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    match commands::dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if json {
                println!("{}", error_json(&format!("{:#}", err)));
            } else {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr. `-v` flags win over `RUST_LOG`; with neither, only
/// warnings are shown.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("linthold=info"),
        2 => EnvFilter::new("linthold=debug"),
        _ => EnvFilter::new("linthold=trace"),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .with(filter)
        .init();
}
