//! CSV line parsing
//!
//! Two parsers share the same contract: one line in, one [`Row`] out, never
//! an error. See [`parser`] for the quote-escaping state machine and
//! [`parse_line_no_escape`] for the legacy toggle variant.

mod no_escape;
pub mod parser;

pub use parser::{CsvParser, LineState};

use crate::types::Row;

/// Parse a line with `,` as delimiter and `""` as escaped quote
///
/// ```
/// assert_eq!(csvline::csv::parse_line("a,,c"), vec!["a", "", "c"]);
/// ```
pub fn parse_line(line: &str) -> Row {
    parser::parse_escaping(line, ',', '"')
}

/// Parse a line where `"` only toggles quoting and cannot be escaped
///
/// ```
/// assert_eq!(
///     csvline::csv::parse_line_no_escape(r#"1,"a,b",2"#),
///     vec!["1", "a,b", "2"]
/// );
/// ```
pub fn parse_line_no_escape(line: &str) -> Row {
    no_escape::parse(line, ',', '"')
}

/// Parse many independent lines in parallel, preserving their order
#[cfg(feature = "parallel")]
pub fn parse_lines_parallel<S>(parser: &CsvParser, lines: &[S]) -> crate::types::Table
where
    S: AsRef<str> + Sync,
{
    use rayon::prelude::*;

    lines
        .par_iter()
        .map(|line| parser.parse_line(line.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions_match_default_parser() {
        let line = r#"1,2,"word ""apple""",4,5"#;
        assert_eq!(parse_line(line), CsvParser::default().parse_line(line));
    }

    #[test]
    fn test_variants_differ_on_escaped_quotes() {
        let line = r#""a ""b""""#;
        assert_eq!(parse_line(line), vec![r#"a "b""#]);
        assert_eq!(parse_line_no_escape(line), vec!["a b"]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_preserves_order() {
        let lines: Vec<String> = (0..500).map(|i| format!("{i},\"v{i}\"")).collect();
        let table = parse_lines_parallel(&CsvParser::default(), &lines);
        assert_eq!(table.len(), 500);
        for (i, row) in table.iter().enumerate() {
            assert_eq!(row, &vec![i.to_string(), format!("v{i}")]);
        }
    }
}
