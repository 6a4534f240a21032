//! Tab-separated rendering of parsed tables

use crate::error::Result;
use crate::types::Table;
use std::io::{self, BufWriter, Write};

/// Writes rows as tab-separated text, one row per output line
///
/// Every field is followed by a tab, including the last one.
///
/// # Examples
///
/// ```
/// use csvline::table_printer::TablePrinter;
///
/// let mut printer = TablePrinter::new(Vec::new());
/// printer.print_row(&["a", "b"]).unwrap();
/// assert_eq!(printer.into_inner().unwrap(), b"a\tb\t\n");
/// ```
pub struct TablePrinter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> TablePrinter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Write a single row
    pub fn print_row<S: AsRef<str>>(&mut self, row: &[S]) -> Result<()> {
        for field in row {
            self.writer.write_all(field.as_ref().as_bytes())?;
            self.writer.write_all(b"\t")?;
        }
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Write every row of a table
    pub fn print_table(&mut self, table: &Table) -> Result<()> {
        for row in table {
            self.print_row(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

/// Print a table to stdout
pub fn print_table(table: &Table) -> Result<()> {
    let stdout = io::stdout();
    TablePrinter::new(stdout.lock()).print_table(table)
}
