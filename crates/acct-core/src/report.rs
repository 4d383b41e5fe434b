//! Diagnostic rendering for match failures.
//!
//! The reporter is a stateless sink: it renders a [`MatchReport`] through
//! `tracing` and never touches the verdict. Callers pass it explicitly (or
//! let the convenience methods construct one) and suppress it per call with
//! the `silent` flag — there is no process-wide logger state in the matching
//! engine.

use tracing::warn;

use crate::matcher::MatchReport;

/// Renders match reports as human-readable field-level diffs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter;

impl Reporter {
    /// Create a reporter
    pub fn new() -> Self {
        Self
    }

    /// Emit one report. Successful reports are silent.
    pub fn emit(&self, report: &MatchReport) {
        if report.matched {
            return;
        }
        if let Some(note) = &report.note {
            warn!("match failed: {}", note);
        }
        for diff in &report.diffs {
            warn!(
                "field {}: expected '{}', got '{}'",
                diff.field, diff.expected, diff.actual
            );
        }
    }
}
