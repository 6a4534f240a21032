//! # csvline
//!
//! Line-oriented CSV tokenizer.
//!
//! Each input line is split into fields by a small state machine that
//! understands quoted fields and doubled-quote escapes. Malformed quoting is
//! never an error: the parser always returns a row. File reading and
//! tab-separated printing are thin layers on top.
//!
//! ## Quick Start
//!
//! ```
//! use csvline::parse_line;
//!
//! assert_eq!(parse_line(r#"1,2,"word",4,5"#), vec!["1", "2", "word", "4", "5"]);
//! assert_eq!(parse_line(""), vec![""]);
//! ```
//!
//! ## Reading Files
//!
//! ```no_run
//! use csvline::CsvReader;
//!
//! let table = CsvReader::open("data.csv")?
//!     .uniform_width(true)
//!     .read_table()?;
//! csvline::print_table(&table)?;
//! # Ok::<(), csvline::CsvError>(())
//! ```

pub mod csv;
pub mod csv_reader;
pub mod error;
pub mod table_printer;
pub mod types;

pub use csv::{parse_line, parse_line_no_escape, CsvParser};
pub use csv_reader::{read_csv_file, CsvReader, ReaderOptions};
pub use error::{CsvError, Result};
pub use table_printer::{print_table, TablePrinter};
pub use types::{QuoteMode, Row, Table};

#[cfg(feature = "parallel")]
pub use csv::parse_lines_parallel;
