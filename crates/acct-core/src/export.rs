//! Column projection for declarative test fixtures.
//!
//! A [`Projection`] takes a raw accounting file's [`RecordSet`] and emits a
//! key→value map per record, restricted to a caller-chosen subset and
//! ordering of schema fields, serialized as human-readable JSON suitable for
//! embedding in test fixtures. Column names are validated against the schema
//! up front — an undefined name is an error, never silently dropped.

use serde_json::{Map, Value};

use crate::error::{AcctError, Result};
use crate::recordset::RecordSet;
use crate::schema::RecordKind;

/// Default CDR columns: the summary fields a fixture usually asserts on.
pub const CDR_BASE_COLUMNS: &[&str] = &[
    "accountcode",
    "source",
    "destination",
    "dcontext",
    "lastapp",
    "lastdata",
    "duration",
    "billsec",
    "disposition",
];

/// Default CEL columns: the event identity fields, without the per-run
/// timestamps and unique ids that would make a fixture unstable.
pub const CEL_BASE_COLUMNS: &[&str] = &[
    "eventtype",
    "cidname",
    "cidnum",
    "dnid",
    "exten",
    "context",
    "channel",
    "app",
    "appdata",
];

/// A validated, ordered selection of schema columns.
#[derive(Debug, Clone)]
pub struct Projection {
    kind: RecordKind,
    columns: Vec<&'static str>,
}

impl Projection {
    /// Projection over the base column set for a record kind
    pub fn new(kind: RecordKind) -> Self {
        let base = match kind {
            RecordKind::Cdr => CDR_BASE_COLUMNS,
            RecordKind::Cel => CEL_BASE_COLUMNS,
        };
        Self {
            kind,
            columns: base.to_vec(),
        }
    }

    /// Projection over caller-chosen columns, in the caller's order.
    ///
    /// Every name must exist in the schema; the first unknown name fails the
    /// whole construction with `UnknownField`.
    pub fn with_columns(kind: RecordKind, names: &[&str]) -> Result<Self> {
        let schema = kind.schema();
        let mut columns = Vec::with_capacity(names.len());
        for name in names {
            let idx = schema.require(name)?;
            columns.push(schema.fields()[idx]);
        }
        Ok(Self { kind, columns })
    }

    /// The record kind this projection applies to
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// The selected column names, in output order
    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    /// Project a record set into one key→value map per record.
    pub fn project(&self, set: &RecordSet) -> Result<Vec<Map<String, Value>>> {
        if set.kind() != self.kind {
            return Err(AcctError::KindMismatch {
                expected: self.kind,
                actual: set.kind(),
            });
        }
        let rows = set
            .iter()
            .map(|record| {
                self.columns
                    .iter()
                    .map(|column| {
                        let value = record.get(column).unwrap_or_default();
                        (column.to_string(), Value::String(value.to_string()))
                    })
                    .collect()
            })
            .collect();
        Ok(rows)
    }

    /// Project and serialize as pretty-printed JSON.
    pub fn to_json_string(&self, set: &RecordSet) -> Result<String> {
        let rows = self.project(set)?;
        serde_json::to_string_pretty(&rows).map_err(|source| AcctError::Serialize {
            reason: source.to_string(),
        })
    }
}
