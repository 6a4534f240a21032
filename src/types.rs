//! Type definitions for parsed CSV data

use std::fmt;

/// One parsed line: its fields in the order encountered
///
/// A row produced by the parsers always holds at least one field.
pub type Row = Vec<String>;

/// Ordered sequence of rows, one per input line
pub type Table = Vec<Row>;

/// How quote characters are interpreted while splitting a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum QuoteMode {
    /// Quoted fields with doubled-quote escapes (`""` -> `"`)
    #[default]
    Escaping,
    /// Quotes only toggle the in-quotes flag; no escape sequence exists
    NoEscape,
}

impl fmt::Display for QuoteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteMode::Escaping => write!(f, "escaping"),
            QuoteMode::NoEscape => write!(f, "no-escape"),
        }
    }
}
