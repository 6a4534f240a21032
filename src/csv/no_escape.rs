//! Toggle-based line parser without escape sequences
//!
//! Every quote flips the in-quotes flag and is dropped, so a literal quote
//! can never appear in a field. Kept for files written by tools that never
//! doubled their quotes.

use crate::types::Row;

pub(crate) fn parse(line: &str, delimiter: char, quote: char) -> Row {
    let mut fields = Vec::new();
    let mut current_field = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == delimiter {
            if in_quotes {
                current_field.push(ch);
            } else {
                fields.push(std::mem::take(&mut current_field));
            }
        } else if ch == quote {
            in_quotes = !in_quotes;
        } else {
            current_field.push(ch);
        }
    }

    fields.push(current_field);
    fields
}
