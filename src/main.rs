//! Marginalia - inline annotations for plain-text outline documents
//!
//! A command-line front end over `marginalia-core`: list, search, tag,
//! add, delete and export `[[note:...]]` annotations.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use marginalia_core::error::MarginaliaError;
use marginalia_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&cli, &e),
    }
}

/// Print a command failure in the requested format and map it to an exit code
fn report(cli: &Cli, error: &MarginaliaError) -> ExitCode {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", error);
    }
    exit_code(error)
}

fn exit_code(error: &MarginaliaError) -> ExitCode {
    ExitCode::from(error.exit_code() as u8)
}

/// Argument errors happen before `--format` is known, so peek at argv to
/// decide whether to answer with a JSON envelope
fn parse_failure(err: clap::Error) -> ExitCode {
    if !argv_requests_json() {
        err.exit();
    }

    let error = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument => MarginaliaError::UsageError(err.to_string()),
        _ => MarginaliaError::Other(err.to_string()),
    };
    eprintln!("{}", error.to_json());
    exit_code(&error)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}
