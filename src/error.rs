//! Error types for reading and printing CSV tables
//!
//! The line parsers never fail; every error here comes from file access
//! or from a reader-level policy.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`CsvError`]
pub type Result<T> = std::result::Result<T, CsvError>;

/// Errors raised by [`CsvReader`](crate::csv_reader::CsvReader) and
/// [`TablePrinter`](crate::table_printer::TablePrinter)
#[derive(Debug, Error)]
pub enum CsvError {
    /// The input file could not be opened
    #[error("failed to open CSV file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a line failed (I/O error or invalid UTF-8)
    #[error("failed to read line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: io::Error,
    },

    /// Writing output failed
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),

    /// A row's field count differs from the first row's
    #[error("row length mismatch at line {line}: expected {expected} fields, found {found}")]
    RowLengthMismatch {
        line: u64,
        expected: usize,
        found: usize,
    },
}
