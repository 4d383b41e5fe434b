//! Error handling for accounting-record loading and matching.
//!
//! Errors here cover the fatal/setup class only: unreadable files, malformed
//! lines, and unknown field names. A match that fails is not an error — the
//! matching engine reports verdicts as booleans and structured diffs, never
//! through this type.

use thiserror::Error;

use crate::schema::RecordKind;

/// Result type alias for accounting-record operations
pub type Result<T> = std::result::Result<T, AcctError>;

/// Error type for accounting-record operations
#[derive(Error, Debug)]
pub enum AcctError {
    /// Accounting file could not be read
    #[error("Failed to read accounting file {path}: {reason}")]
    Io { path: String, reason: String },

    /// A line did not decode to the schema's column count
    #[error("Malformed {kind} line {line}: expected {expected} columns, got {actual}")]
    MalformedLine {
        kind: RecordKind,
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// A field name was looked up that the schema does not define
    #[error("Unknown {kind} field: {name}")]
    UnknownField { kind: RecordKind, name: String },

    /// A record kind string could not be parsed
    #[error("Unknown record kind: {name} (expected \"cdr\" or \"cel\")")]
    UnknownKind { name: String },

    /// Two sides of an operation were bound to different schemas
    #[error("Record kind mismatch: expected {expected}, got {actual}")]
    KindMismatch {
        expected: RecordKind,
        actual: RecordKind,
    },

    /// Projection output could not be serialized
    #[error("Failed to serialize projection: {reason}")]
    Serialize { reason: String },
}

impl AcctError {
    /// Create a new I/O error for the given path
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            reason: source.to_string(),
        }
    }

    /// Create a new malformed-line error
    pub fn malformed_line(kind: RecordKind, line: usize, expected: usize, actual: usize) -> Self {
        Self::MalformedLine {
            kind,
            line,
            expected,
            actual,
        }
    }

    /// Create a new unknown-field error
    pub fn unknown_field(kind: RecordKind, name: impl Into<String>) -> Self {
        Self::UnknownField {
            kind,
            name: name.into(),
        }
    }
}
