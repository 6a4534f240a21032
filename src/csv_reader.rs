//! CSV file reading, one line at a time

use crate::csv::CsvParser;
use crate::error::{CsvError, Result};
use crate::types::{QuoteMode, Row, Table};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Reader configuration
///
/// Every field can also be set through the matching [`CsvReader`] builder
/// method.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderOptions {
    pub delimiter: u8,
    pub quote_char: u8,
    pub quote_mode: QuoteMode,
    /// Reject rows whose length differs from the first row's
    pub uniform_width: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote_char: b'"',
            quote_mode: QuoteMode::Escaping,
            uniform_width: false,
        }
    }
}

/// CSV file reader
///
/// Splits its input into lines, parses each one with [`CsvParser`] and
/// optionally enforces a uniform row width.
///
/// # Examples
///
/// ```no_run
/// use csvline::csv_reader::CsvReader;
///
/// let mut reader = CsvReader::open("data.csv").unwrap();
///
/// for row_result in reader.rows() {
///     let row = row_result.unwrap();
///     println!("{:?}", row);
/// }
/// ```
///
/// # Uniform width
///
/// ```no_run
/// use csvline::csv_reader::CsvReader;
/// use csvline::CsvError;
///
/// let reader = CsvReader::open("data.csv").unwrap().uniform_width(true);
/// match reader.read_table() {
///     Ok(table) => println!("{} rows", table.len()),
///     Err(CsvError::RowLengthMismatch { line, .. }) => eprintln!("bad row at {line}"),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
pub struct CsvReader<R = BufReader<File>> {
    source: R,

    // Parser state
    line_buffer: String,
    line_number: u64,
    row_count: u64,
    expected_width: Option<usize>,

    options: ReaderOptions,
}

impl CsvReader<BufReader<File>> {
    /// Open a CSV file
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use csvline::csv_reader::CsvReader;
    ///
    /// let reader = CsvReader::open("data.csv").unwrap();
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let file = File::open(path_ref).map_err(|source| CsvError::Open {
            path: path_ref.to_path_buf(),
            source,
        })?;

        debug!(path = %path_ref.display(), "opened CSV file");
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> CsvReader<R> {
    /// Read CSV from any buffered source
    ///
    /// ```
    /// use csvline::csv_reader::CsvReader;
    ///
    /// let reader = CsvReader::from_reader("a,b\n1,2\n".as_bytes());
    /// let table = reader.read_table().unwrap();
    /// assert_eq!(table, vec![vec!["a", "b"], vec!["1", "2"]]);
    /// ```
    pub fn from_reader(source: R) -> Self {
        CsvReader {
            source,
            line_buffer: String::with_capacity(1024),
            line_number: 0,
            row_count: 0,
            expected_width: None,
            options: ReaderOptions::default(),
        }
    }

    /// Replace the whole configuration (builder pattern)
    pub fn with_options(mut self, options: ReaderOptions) -> Self {
        self.options = options;
        self
    }

    /// Set custom delimiter (builder pattern)
    pub fn delimiter(mut self, delim: u8) -> Self {
        self.options.delimiter = delim;
        self
    }

    /// Set custom quote character (builder pattern)
    pub fn quote_char(mut self, quote: u8) -> Self {
        self.options.quote_char = quote;
        self
    }

    /// Select the quote handling (builder pattern)
    pub fn quote_mode(mut self, mode: QuoteMode) -> Self {
        self.options.quote_mode = mode;
        self
    }

    /// Require every row to have as many fields as the first (builder pattern)
    pub fn uniform_width(mut self, enforce: bool) -> Self {
        self.options.uniform_width = enforce;
        self
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Read a single row
    ///
    /// Returns `Ok(None)` when EOF is reached.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use csvline::csv_reader::CsvReader;
    ///
    /// let mut reader = CsvReader::open("data.csv").unwrap();
    ///
    /// while let Some(row) = reader.read_row().unwrap() {
    ///     println!("{:?}", row);
    /// }
    /// ```
    pub fn read_row(&mut self) -> Result<Option<Row>> {
        self.line_buffer.clear();
        self.line_number += 1;

        let bytes_read =
            self.source
                .read_line(&mut self.line_buffer)
                .map_err(|source| CsvError::Read {
                    line: self.line_number,
                    source,
                })?;

        if bytes_read == 0 {
            self.line_number -= 1;
            return Ok(None); // EOF
        }

        if self.line_buffer.ends_with('\n') {
            self.line_buffer.pop();
            if self.line_buffer.ends_with('\r') {
                self.line_buffer.pop();
            }
        }

        let parser = CsvParser::new(self.options.delimiter, self.options.quote_char)
            .with_mode(self.options.quote_mode);
        let fields = parser.parse_line(&self.line_buffer);
        trace!(line = self.line_number, fields = fields.len(), "parsed row");

        if self.options.uniform_width {
            self.check_width(fields.len())?;
        }

        self.row_count += 1;
        Ok(Some(fields))
    }

    fn check_width(&mut self, found: usize) -> Result<()> {
        match self.expected_width {
            None => {
                self.expected_width = Some(found);
                Ok(())
            }
            Some(expected) if expected == found => Ok(()),
            Some(expected) => {
                warn!(
                    line = self.line_number,
                    expected, found, "row length mismatch"
                );
                Err(CsvError::RowLengthMismatch {
                    line: self.line_number,
                    expected,
                    found,
                })
            }
        }
    }

    /// Get iterator over rows
    ///
    /// The iterator stops after the first error.
    pub fn rows(&mut self) -> CsvRowIterator<'_, R> {
        CsvRowIterator {
            reader: self,
            done: false,
        }
    }

    /// Read every remaining row into a table
    ///
    /// Aborts on the first error; rows collected so far are dropped.
    pub fn read_table(mut self) -> Result<Table> {
        let table = self.rows().collect::<Result<Table>>()?;
        debug!(rows = table.len(), "finished reading table");
        Ok(table)
    }

    /// Get the number of rows read so far
    pub fn row_count(&self) -> u64 {
        self.row_count
    }
}

/// Iterator over CSV rows
pub struct CsvRowIterator<'a, R> {
    reader: &'a mut CsvReader<R>,
    done: bool,
}

impl<R: BufRead> Iterator for CsvRowIterator<'_, R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read_row() {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Read a whole CSV file with the default options
///
/// ```no_run
/// let table = csvline::read_csv_file("data.csv").unwrap();
/// csvline::print_table(&table).unwrap();
/// ```
pub fn read_csv_file<P: AsRef<Path>>(path: P) -> Result<Table> {
    CsvReader::open(path)?.read_table()
}
