//! csvline CLI
//!
//! Reads a CSV file and prints it as tab-separated rows.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use csvline::{CsvReader, QuoteMode, ReaderOptions, Result};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// csvline - print a CSV file as tab-separated rows
#[derive(Parser)]
#[command(name = "csvline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file to read
    file: PathBuf,

    /// Treat quotes as plain toggles (no "" escape)
    #[arg(long)]
    no_escape: bool,

    /// Fail if rows have different numbers of fields
    #[arg(long)]
    uniform_width: bool,

    /// Field delimiter
    #[arg(short, long, default_value = ",", value_parser = parse_ascii_char)]
    delimiter: u8,

    /// Quote character
    #[arg(short, long, default_value = "\"", value_parser = parse_ascii_char)]
    quote: u8,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn reader_options(&self) -> ReaderOptions {
        ReaderOptions {
            delimiter: self.delimiter,
            quote_char: self.quote,
            quote_mode: if self.no_escape {
                QuoteMode::NoEscape
            } else {
                QuoteMode::Escaping
            },
            uniform_width: self.uniform_width,
        }
    }
}

fn parse_ascii_char(s: &str) -> std::result::Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("expected a single ASCII character, got {s:?}")),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.reader_options();
    debug!(?options, "reader configuration");

    let table = CsvReader::open(&cli.file)?
        .with_options(options)
        .read_table()?;
    csvline::print_table(&table)
}
