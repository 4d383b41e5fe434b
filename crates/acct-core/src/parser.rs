//! Positional decoding of comma-delimited accounting lines.
//!
//! One raw line decodes into one [`Record`]: tokens split on commas, each
//! stripped of surrounding whitespace and then surrounding double quotes.
//! There is no escaping of embedded commas within quoted fields — quote
//! stripping is all the format guarantees, and this stays byte-compatible
//! with the fixtures produced by the accounting backends.

use crate::error::{AcctError, Result};
use crate::record::Record;
use crate::schema::Schema;

/// Decode one raw line into a record.
///
/// The token count must equal the schema's field count; otherwise the line is
/// malformed and the enclosing file load fails. `line_no` is 1-based and only
/// used for the error.
pub fn parse_line(schema: &Schema, line: &str, line_no: usize) -> Result<Record> {
    let tokens: Vec<&str> = line.split(',').collect();
    if tokens.len() != schema.len() {
        return Err(AcctError::malformed_line(
            schema.kind(),
            line_no,
            schema.len(),
            tokens.len(),
        ));
    }
    let values = tokens
        .iter()
        .map(|token| strip_token(token).to_string())
        .collect();
    Ok(Record::from_values(schema.kind(), values))
}

/// Strip surrounding whitespace, then one pair of surrounding double quotes.
fn strip_token(token: &str) -> &str {
    let trimmed = token.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    }
}
