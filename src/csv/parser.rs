//! Quote-escaping line parser
//!
//! Splits one line into fields with a three-state machine:
//!
//! - `Unquoted`: plain field content, the delimiter ends a field
//! - `Quoted`: inside a quoted field, delimiters are literal
//! - `AfterQuoteInQuoted`: a quote was seen inside a quoted field; the next
//!   character decides whether it closed the field, was the first half of an
//!   escaped `""`, or was malformed
//!
//! Unlike strict RFC 4180, a closing quote followed by anything other than
//! the delimiter or another quote is not rejected. The quote is dropped, the
//! character is kept and parsing continues unquoted, so `"ab"c` reads as
//! `abc`.

use super::no_escape;
use crate::types::{QuoteMode, Row};

/// Character class seen by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Delimiter(char),
    Quote(char),
    Other(char),
}

/// What to do with the current field after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append the character to the current field
    Push(char),
    /// Finish the current field and start a new one
    EmitField,
    /// Drop the character
    Skip,
}

/// Parser state between two characters of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineState {
    #[default]
    Unquoted,
    Quoted,
    AfterQuoteInQuoted,
}

impl LineState {
    /// Transition for one character
    pub fn step(self, class: CharClass) -> (LineState, Action) {
        use CharClass::*;
        use LineState::*;

        match (self, class) {
            (Unquoted, Delimiter(_)) => (Unquoted, Action::EmitField),
            (Unquoted, Quote(_)) => (Quoted, Action::Skip),
            (Unquoted, Other(c)) => (Unquoted, Action::Push(c)),

            (Quoted, Quote(_)) => (AfterQuoteInQuoted, Action::Skip),
            (Quoted, Delimiter(c)) | (Quoted, Other(c)) => (Quoted, Action::Push(c)),

            // Closing quote, then field separator
            (AfterQuoteInQuoted, Delimiter(_)) => (Unquoted, Action::EmitField),
            // Escaped quote
            (AfterQuoteInQuoted, Quote(q)) => (Quoted, Action::Push(q)),
            // Malformed: keep the character, forget the quote
            (AfterQuoteInQuoted, Other(c)) => (Unquoted, Action::Push(c)),
        }
    }
}

/// CSV line parser with configurable delimiter, quote character and quote mode
///
/// # Examples
///
/// ```
/// use csvline::csv::CsvParser;
///
/// let parser = CsvParser::default();
/// assert_eq!(
///     parser.parse_line(r#"1,2,"word ""apple""",4,5"#),
///     vec!["1", "2", r#"word "apple""#, "4", "5"]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvParser {
    delimiter: u8,
    quote_char: u8,
    mode: QuoteMode,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new(b',', b'"')
    }
}

impl CsvParser {
    /// Create a new CSV parser with custom delimiter and quote character
    pub fn new(delimiter: u8, quote_char: u8) -> Self {
        Self {
            delimiter,
            quote_char,
            mode: QuoteMode::Escaping,
        }
    }

    /// Select how quotes are interpreted (builder pattern)
    pub fn with_mode(mut self, mode: QuoteMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> QuoteMode {
        self.mode
    }

    /// Parse CSV line into fields
    ///
    /// Never fails. The returned row always has at least one field.
    pub fn parse_line(&self, line: &str) -> Row {
        let delimiter = self.delimiter as char;
        let quote = self.quote_char as char;

        match self.mode {
            QuoteMode::Escaping => parse_escaping(line, delimiter, quote),
            QuoteMode::NoEscape => no_escape::parse(line, delimiter, quote),
        }
    }
}

fn classify(ch: char, delimiter: char, quote: char) -> CharClass {
    if ch == quote {
        CharClass::Quote(ch)
    } else if ch == delimiter {
        CharClass::Delimiter(ch)
    } else {
        CharClass::Other(ch)
    }
}

pub(crate) fn parse_escaping(line: &str, delimiter: char, quote: char) -> Row {
    let mut fields = Vec::new();
    let mut current_field = String::new();
    let mut state = LineState::default();

    for ch in line.chars() {
        let (next, action) = state.step(classify(ch, delimiter, quote));
        match action {
            Action::Push(c) => current_field.push(c),
            Action::EmitField => fields.push(std::mem::take(&mut current_field)),
            Action::Skip => {}
        }
        state = next;
    }

    // Pending field is kept whatever the final state
    fields.push(current_field);
    fields
}
