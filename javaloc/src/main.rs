//! # javaloc
//!
//! A CLI tool for counting lines of Java code while skipping duplicated files.
//!
//! ## Overview
//!
//! javaloc is built on top of javaloclib. It takes one path, counts every
//! `.java` file below it once per distinct content, and prints a single line:
//!
//! ```text
//! <files>-<unique files>-<blank lines>-<comment lines>-<code lines>
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Count a source tree
//! javaloc src/
//!
//! # Count one file
//! javaloc src/main/java/app/Main.java
//!
//! # Show skipped files and per-file counts on stderr
//! RUST_LOG=javaloclib=debug javaloc src/
//! ```
//!
//! ## Exit codes
//!
//! - `0`: a report was printed, even if nothing was found (`0-0-0-0-0`)
//! - `1`: logging could not be initialized
//! - `2`: usage error, such as a missing path

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{value_parser, Arg, Command};
use javaloclib::{count_path, CountOptions, Report};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("javaloc")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Counts blank, comment and code lines across unique Java files")
        .arg(
            Arg::new("path")
                .help("File or directory to analyze")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
}

/// Send diagnostics to stderr so stdout carries only the report.
fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    if let Err(e) = init_logging() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let Some(path) = matches.get_one::<PathBuf>("path") else {
        // `required(true)` makes clap exit before this point.
        return ExitCode::from(2);
    };

    let result = count_path(path, &CountOptions::new());
    tracing::debug!(path = %path.display(), ?result, "count finished");

    println!("{}", Report::new(&result));
    ExitCode::SUCCESS
}
