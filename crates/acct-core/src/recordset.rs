//! Ordered collections of parsed accounting records.
//!
//! One [`RecordSet`] corresponds to one accounting file, records in file
//! order (CDR) or causal log order (CEL). A failed read or a single malformed
//! line fails the whole load — a broken fixture is a distinct failure class
//! from a genuine accounting mismatch and must never produce a partially
//! populated set.

use std::ops::Index;
use std::path::Path;
use std::{fs, slice};

use crate::error::{AcctError, Result};
use crate::matcher::{self, Exactness};
use crate::parser;
use crate::record::{Pattern, Record};
use crate::report::Reporter;
use crate::schema::RecordKind;

/// An ordered, indexable sequence of records from one accounting file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    kind: RecordKind,
    records: Vec<Record>,
}

impl RecordSet {
    /// Load an accounting file: read it whole, parse every line.
    ///
    /// Blank lines are skipped; any other line must decode to the schema's
    /// column count. Both I/O and parse failures are fatal and propagate.
    pub fn from_file(path: impl AsRef<Path>, kind: RecordKind) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|source| AcctError::io(path.display().to_string(), source))?;
        Self::from_contents(&contents, kind)
    }

    /// Parse accounting lines already held in memory.
    pub fn from_contents(contents: &str, kind: RecordKind) -> Result<Self> {
        let schema = kind.schema();
        let mut records = Vec::new();
        for (idx, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            records.push(parser::parse_line(schema, line, idx + 1)?);
        }
        Ok(Self { kind, records })
    }

    /// The record kind of every record in the set
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Number of parsed records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at an index, if present
    pub fn get(&self, idx: usize) -> Option<&Record> {
        self.records.get(idx)
    }

    /// The final record, if any — for CEL logs this is the closing
    /// `LINKEDID_END` entry of the call
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Iterate over records in log order
    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Match this log against another record set, record for record.
    ///
    /// Every record of `expected` becomes a fully specified pattern. A set
    /// matched against an identical copy of itself always succeeds.
    pub fn matches(&self, expected: &RecordSet, exactness: Exactness, silent: bool) -> bool {
        let patterns: Vec<Pattern> = expected.iter().map(Pattern::from_record).collect();
        self.matches_patterns(&patterns, exactness, silent)
    }

    /// Match this log against an ordered pattern list.
    ///
    /// Delegates to [`matcher::match_sequence`]: greedy, non-backtracking,
    /// order-preserving. Diagnostics go through the [`Reporter`] unless
    /// `silent`.
    pub fn matches_patterns(
        &self,
        patterns: &[Pattern],
        exactness: Exactness,
        silent: bool,
    ) -> bool {
        let report = matcher::match_sequence(self, patterns, exactness);
        if !silent {
            Reporter::new().emit(&report);
        }
        report.matched
    }
}

impl Index<usize> for RecordSet {
    type Output = Record;

    fn index(&self, idx: usize) -> &Record {
        &self.records[idx]
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CDR_LINES: &str = "\
,101,201,default,,SIP/101-00000000,,hangup,,2025-01-05 12:00:00,2025-01-05 12:00:00,2025-01-05 12:00:07,7,7,ANSWERED,DOCUMENTATION,1736078400.0,
,201,301,default,,SIP/201-00000002,,Dial,SIP/301@default,2025-01-05 12:01:00,,2025-01-05 12:01:30,30,0,NO ANSWER,DOCUMENTATION,1736078460.0,
";

    #[test]
    fn test_length_tracks_parsed_lines() {
        let set = RecordSet::from_contents(TWO_CDR_LINES, RecordKind::Cdr).unwrap();
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set[0].get("duration"), Some("7"));
        assert_eq!(set.last().unwrap().get("disposition"), Some("NO ANSWER"));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let padded = format!("\n{TWO_CDR_LINES}\n\n");
        let set = RecordSet::from_contents(&padded, RecordKind::Cdr).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_malformed_line_fails_whole_load() {
        let broken = format!("{TWO_CDR_LINES}too,few,columns\n");
        let err = RecordSet::from_contents(&broken, RecordKind::Cdr).unwrap_err();
        assert!(matches!(err, AcctError::MalformedLine { line: 3, .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RecordSet::from_file("/nonexistent/Master.csv", RecordKind::Cdr).unwrap_err();
        assert!(matches!(err, AcctError::Io { .. }));
    }

    #[test]
    fn test_set_matches_identical_copy() {
        let set = RecordSet::from_contents(TWO_CDR_LINES, RecordKind::Cdr).unwrap();
        let copy = set.clone();
        assert!(set.matches(&copy, Exactness::full(), true));
        assert!(set.matches(&copy, Exactness::partial(), true));
    }

    #[test]
    fn test_distinct_records_do_not_cross_match() {
        let set = RecordSet::from_contents(TWO_CDR_LINES, RecordKind::Cdr).unwrap();
        assert!(!set[0].matches_record(&set[1], Exactness::full(), true));
        assert!(!set[1].matches_record(&set[0], Exactness::full(), true));
    }
}
