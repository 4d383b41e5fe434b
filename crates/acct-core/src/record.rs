//! The Record and Pattern model.
//!
//! A [`Record`] is one fully specified, schema-bound accounting entry parsed
//! from a file. It is immutable once constructed and every schema field has a
//! defined string value, possibly empty.
//!
//! A [`Pattern`] is a partially specified expectation: each field is
//! independently either specified (an expected literal, or an anchored regular
//! expression under partial field exactness) or unspecified, in which case it
//! is a wildcard. Patterns are ephemeral — built by test code, scoped to one
//! assertion.

use crate::error::Result;
use crate::matcher::{self, Exactness};
use crate::report::Reporter;
use crate::schema::{RecordKind, Schema};

/// One parsed accounting entry: an ordered field-name → string-value
/// association bound to its schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    kind: RecordKind,
    values: Vec<String>,
}

impl Record {
    /// Invariant: `values.len() == kind.schema().len()`, enforced by the
    /// parser before construction.
    pub(crate) fn from_values(kind: RecordKind, values: Vec<String>) -> Self {
        debug_assert_eq!(values.len(), kind.schema().len());
        Self { kind, values }
    }

    /// The record kind this record is bound to
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// The schema this record was decoded with
    pub fn schema(&self) -> &'static Schema {
        self.kind.schema()
    }

    /// Value of a field by name, or `None` if the schema does not define it
    pub fn get(&self, name: &str) -> Option<&str> {
        self.schema()
            .position(name)
            .map(|idx| self.values[idx].as_str())
    }

    /// Value of a field by name, failing with `UnknownField` if absent
    pub fn field(&self, name: &str) -> Result<&str> {
        self.schema()
            .require(name)
            .map(|idx| self.values[idx].as_str())
    }

    pub(crate) fn value_at(&self, idx: usize) -> &str {
        self.values[idx].as_str()
    }

    /// Iterate over `(field name, value)` pairs in schema order
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.schema()
            .fields()
            .iter()
            .zip(self.values.iter())
            .map(|(name, value)| (*name, value.as_str()))
    }

    /// Match this record against a pattern.
    ///
    /// Returns the boolean verdict; field-level diffs are rendered through
    /// the [`Reporter`] unless `silent` is set. Reporting never affects the
    /// verdict. For the structured result, use [`matcher::match_record`].
    pub fn matches(&self, pattern: &Pattern, exactness: Exactness, silent: bool) -> bool {
        let report = matcher::match_record(self, pattern, exactness);
        if !silent {
            Reporter::new().emit(&report);
        }
        report.matched
    }

    /// Match this record against another record, field for field.
    ///
    /// Equivalent to matching against `Pattern::from_record(other)`: every
    /// field of `other` is a specified expectation. A record matched against
    /// itself succeeds under any exactness configuration.
    pub fn matches_record(&self, other: &Record, exactness: Exactness, silent: bool) -> bool {
        self.matches(&Pattern::from_record(other), exactness, silent)
    }
}

/// A partially specified expectation over one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    kind: RecordKind,
    values: Vec<Option<String>>,
}

impl Pattern {
    /// Create a pattern with every field unspecified (all wildcards)
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            values: vec![None; kind.schema().len()],
        }
    }

    /// Specify an expected value for a named field.
    ///
    /// Fails with `UnknownField` if the schema does not define the name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use callcheck_acct_core::{Pattern, RecordKind};
    ///
    /// let pattern = Pattern::new(RecordKind::Cdr)
    ///     .field("duration", "7")?
    ///     .field("lastapp", "hangup")?;
    /// assert_eq!(pattern.get("duration"), Some("7"));
    /// assert_eq!(pattern.get("billsec"), None);
    /// # Ok::<(), callcheck_acct_core::AcctError>(())
    /// ```
    pub fn field(mut self, name: &str, value: impl Into<String>) -> Result<Self> {
        let idx = self.kind.schema().require(name)?;
        self.values[idx] = Some(value.into());
        Ok(self)
    }

    /// Build a fully specified pattern from a record: every field becomes a
    /// specified expectation equal to the record's value.
    pub fn from_record(record: &Record) -> Self {
        Self {
            kind: record.kind(),
            values: record
                .fields()
                .map(|(_, value)| Some(value.to_string()))
                .collect(),
        }
    }

    /// The record kind this pattern is bound to
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// The schema this pattern is bound to
    pub fn schema(&self) -> &'static Schema {
        self.kind.schema()
    }

    /// The specified value for a field, or `None` if the field is a wildcard
    /// or the schema does not define the name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.schema()
            .position(name)
            .and_then(|idx| self.values[idx].as_deref())
    }

    pub(crate) fn value_at(&self, idx: usize) -> Option<&str> {
        self.values[idx].as_deref()
    }

    /// Match a record against this pattern. Same semantics as
    /// [`Record::matches`], callable from either side.
    pub fn matches(&self, record: &Record, exactness: Exactness, silent: bool) -> bool {
        record.matches(self, exactness, silent)
    }
}
