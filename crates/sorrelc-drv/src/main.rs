//! Sorrelc driver - the command-line front end for the Sorrel scanner.
//!
//! Reads a Sorrel source file (or a built-in sample program when no file
//! is given), scans it into tokens, and prints one token per line on
//! stdout. When the scan stops early, every token recognized before the
//! failure is still printed and the error is reported on stderr.

mod error;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use error::{DriverError, Result};
use sorrelc_lex::Lexer;

/// Built-in Sorrel program scanned when no input file is given.
const SAMPLE_PROGRAM: &str =
    "println + 420 69;\nlet sayHello a b = printf \"Hi, %s!\" a;\nsayHello \"world\";\n";

/// Sorrelc - the Sorrel language scanner
///
/// Sorrelc scans a Sorrel source file and prints its token stream,
/// one token per line.
#[derive(Parser, Debug)]
#[command(name = "sorrelc")]
#[command(author = "Sorrel Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scans Sorrel source code and prints the token stream", long_about = None)]
struct Cli {
    /// Sorrel source file to scan (default: a built-in sample program)
    input: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "SORRELC_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "SORRELC_NO_COLOR")]
    no_color: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Parse arguments, initialize logging, and scan the requested source.
fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let source = load_source(cli.input.as_deref())?;
    scan(&source)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that stdout carries nothing but token lines.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
///
/// # Returns
/// * `Result<()>` - Success or an error
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Logging(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Read the source program from a file, or fall back to the sample.
fn load_source(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            debug!("reading {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            debug!("no input file, scanning the built-in sample program");
            Ok(SAMPLE_PROGRAM.to_string())
        }
    }
}

/// Scan the source and print one token per line.
///
/// Tokens recognized before a failure are printed before the error is
/// returned, so partial output is always visible.
fn scan(source: &str) -> Result<()> {
    debug!("scanning {} bytes", source.len());

    let (tokens, error) = Lexer::new(source).tokenize();
    for token in &tokens {
        println!("{}", token);
    }
    debug!("recognized {} tokens", tokens.len());

    match error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
