//! Record and sequence matching.
//!
//! The matchers here are pure: they take the actual side, the expectation,
//! and an [`Exactness`] configuration, and return a structured
//! [`MatchReport`]. No global state, no I/O — rendering of diagnostics is the
//! [`Reporter`](crate::report::Reporter)'s job and never affects the verdict.
//!
//! # Exactness
//!
//! Exactness is a pair of independent per-assertion flags:
//!
//! - **field exactness** — how specified pattern fields are compared. Exact:
//!   literal string equality only. Partial: literal equality first, then the
//!   expected value is retried as an anchored regular expression, so
//!   expectations like `SIP/bob-.*` can tolerate run-dependent suffixes.
//!   Unspecified pattern fields are wildcards either way. Literal equality is
//!   always tried first, which keeps matching a record against itself true
//!   under every configuration even when values contain regex
//!   metacharacters.
//! - **count exactness** — whether the two sequences must have identical
//!   length, versus the pattern list being allowed to match a subsequence of
//!   the actual set.
//!
//! # Sequence alignment
//!
//! [`match_sequence`] is a single forward pass with two independent cursors:
//! greedy, non-backtracking, order-preserving, O(n). A pattern that could
//! match a later record but is blocked by an earlier ambiguous match fails —
//! that determinism is deliberate and existing fixtures depend on it.

use regex::Regex;

use crate::record::{Pattern, Record};
use crate::recordset::RecordSet;

/// Per-assertion strictness flags for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exactness {
    /// Specified fields compare by literal equality only
    pub fields: bool,
    /// Sequences must have identical length, one-to-one
    pub count: bool,
}

impl Exactness {
    /// Both flags set: literal field comparison, one-to-one sequences
    pub fn full() -> Self {
        Self {
            fields: true,
            count: true,
        }
    }

    /// Both flags clear: regex-tolerant fields, subsequence matching
    pub fn partial() -> Self {
        Self {
            fields: false,
            count: false,
        }
    }

    /// Set each flag independently
    pub fn new(fields: bool, count: bool) -> Self {
        Self { fields, count }
    }
}

impl Default for Exactness {
    fn default() -> Self {
        Self::partial()
    }
}

/// One field-level expected/actual divergence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDiff {
    /// Schema field name
    pub field: &'static str,
    /// The pattern's expected value
    pub expected: String,
    /// The record's actual value
    pub actual: String,
}

/// Structured result of one match: the verdict plus its diagnostic trail.
#[derive(Debug, Clone, Default)]
pub struct MatchReport {
    /// The boolean verdict
    pub matched: bool,
    /// Field-level divergences, in schema order
    pub diffs: Vec<FieldDiff>,
    /// Sequence- or kind-level context when the failure is not field-shaped
    pub note: Option<String>,
}

impl MatchReport {
    fn success() -> Self {
        Self {
            matched: true,
            diffs: Vec::new(),
            note: None,
        }
    }

    fn failure(diffs: Vec<FieldDiff>, note: Option<String>) -> Self {
        Self {
            matched: false,
            diffs,
            note,
        }
    }
}

/// Compare one record against one pattern.
///
/// For each schema field: a specified pattern value must match the record's
/// value (see [`Exactness`] for how); an unspecified field is a wildcard.
/// Every divergence is collected into the report, not just the first.
pub fn match_record(actual: &Record, pattern: &Pattern, exactness: Exactness) -> MatchReport {
    if actual.kind() != pattern.kind() {
        return MatchReport::failure(
            Vec::new(),
            Some(format!(
                "record kind mismatch: pattern is {}, record is {}",
                pattern.kind(),
                actual.kind()
            )),
        );
    }
    let mut diffs = Vec::new();
    for (idx, name) in actual.schema().fields().iter().enumerate() {
        let Some(expected) = pattern.value_at(idx) else {
            continue;
        };
        let value = actual.value_at(idx);
        if !field_matches(expected, value, exactness) {
            diffs.push(FieldDiff {
                field: name,
                expected: expected.to_string(),
                actual: value.to_string(),
            });
        }
    }
    if diffs.is_empty() {
        MatchReport::success()
    } else {
        MatchReport::failure(diffs, None)
    }
}

fn field_matches(expected: &str, actual: &str, exactness: Exactness) -> bool {
    if expected == actual {
        return true;
    }
    if exactness.fields {
        return false;
    }
    // Partial field exactness: the expectation doubles as an anchored regex.
    // An expectation that fails to compile simply does not match.
    match Regex::new(&format!("^(?:{expected})$")) {
        Ok(re) => re.is_match(actual),
        Err(_) => false,
    }
}

/// Compare an ordered record log against an ordered pattern list.
///
/// Greedy forward pass: for each pattern in order, the actual cursor advances
/// until a record matches or the log is exhausted. Matched records are
/// consumed. The verdict is true iff every pattern was satisfied.
pub fn match_sequence(
    actual: &RecordSet,
    expected: &[Pattern],
    exactness: Exactness,
) -> MatchReport {
    if exactness.count && actual.len() != expected.len() {
        return MatchReport::failure(
            Vec::new(),
            Some(format!(
                "record count mismatch: expected {} records, log has {}",
                expected.len(),
                actual.len()
            )),
        );
    }
    let mut cursor = 0;
    for (pat_idx, pattern) in expected.iter().enumerate() {
        let mut last_attempt: Option<MatchReport> = None;
        let mut satisfied = false;
        while cursor < actual.len() {
            let report = match_record(&actual[cursor], pattern, exactness);
            cursor += 1;
            if report.matched {
                satisfied = true;
                break;
            }
            last_attempt = Some(report);
        }
        if !satisfied {
            // Carry the diffs of the last record this pattern was tried
            // against, so a pairwise mismatch still shows field detail.
            let diffs = last_attempt.map(|report| report.diffs).unwrap_or_default();
            return MatchReport::failure(
                diffs,
                Some(format!(
                    "pattern {} of {} unmatched: log exhausted after {} of {} records",
                    pat_idx + 1,
                    expected.len(),
                    cursor,
                    actual.len()
                )),
            );
        }
    }
    MatchReport::success()
}
