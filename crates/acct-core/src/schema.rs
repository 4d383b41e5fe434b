//! Field schemas for CDR and CEL accounting records.
//!
//! A schema is an ordered, fixed list of field names. Field order is stable
//! and defines the positional decoding of each raw line; names are unique
//! within a schema. Both schemas are defined once, at compile time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AcctError, Result};

/// Field names of a Call Detail Record, in file column order.
pub const CDR_FIELDS: &[&str] = &[
    "accountcode",
    "source",
    "destination",
    "dcontext",
    "callerid",
    "channel",
    "dstchannel",
    "lastapp",
    "lastdata",
    "start",
    "answer",
    "end",
    "duration",
    "billsec",
    "disposition",
    "amaflags",
    "uniqueid",
    "userfield",
];

/// Field names of a Call Event Log entry, in file column order.
pub const CEL_FIELDS: &[&str] = &[
    "eventtype",
    "eventtime",
    "cidname",
    "cidnum",
    "ani",
    "rdnis",
    "dnid",
    "exten",
    "context",
    "channel",
    "app",
    "appdata",
    "amaflags",
    "accountcode",
    "uniqueid",
    "linkedid",
    "bridgepeer",
    "userfield",
    "userdeftype",
    "eventextra",
];

/// The kind of accounting record a schema, record, or pattern is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// Call Detail Record: one summary entry per completed call leg
    Cdr,
    /// Call Event Log: one entry per event within a call's lifecycle
    Cel,
}

impl RecordKind {
    /// Get the schema for this record kind
    pub fn schema(self) -> &'static Schema {
        match self {
            Self::Cdr => &CDR_SCHEMA,
            Self::Cel => &CEL_SCHEMA,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cdr => write!(f, "CDR"),
            Self::Cel => write!(f, "CEL"),
        }
    }
}

impl FromStr for RecordKind {
    type Err = AcctError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "cdr" => Ok(Self::Cdr),
            "cel" => Ok(Self::Cel),
            other => Err(AcctError::UnknownKind {
                name: other.to_string(),
            }),
        }
    }
}

/// An ordered, immutable list of field names for one record kind.
#[derive(Debug)]
pub struct Schema {
    kind: RecordKind,
    fields: &'static [&'static str],
}

/// The CDR schema instance
pub static CDR_SCHEMA: Schema = Schema {
    kind: RecordKind::Cdr,
    fields: CDR_FIELDS,
};

/// The CEL schema instance
pub static CEL_SCHEMA: Schema = Schema {
    kind: RecordKind::Cel,
    fields: CEL_FIELDS,
};

impl Schema {
    /// The record kind this schema decodes
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Field names in positional order
    pub fn fields(&self) -> &'static [&'static str] {
        self.fields
    }

    /// Number of fields (equals the expected column count of a raw line)
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Position of a field name, if the schema defines it
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| *field == name)
    }

    /// Whether the schema defines a field name
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Position of a field name, failing with `UnknownField` if absent
    pub fn require(&self, name: &str) -> Result<usize> {
        self.position(name)
            .ok_or_else(|| AcctError::unknown_field(self.kind, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lengths() {
        assert_eq!(CDR_SCHEMA.len(), 18);
        assert_eq!(CEL_SCHEMA.len(), 20);
    }

    #[test]
    fn test_field_names_unique() {
        for schema in [&CDR_SCHEMA, &CEL_SCHEMA] {
            let mut seen = std::collections::HashSet::new();
            for field in schema.fields() {
                assert!(seen.insert(*field), "duplicate field {field}");
            }
        }
    }

    #[test]
    fn test_position_matches_declared_order() {
        assert_eq!(CDR_SCHEMA.position("accountcode"), Some(0));
        assert_eq!(CDR_SCHEMA.position("duration"), Some(12));
        assert_eq!(CDR_SCHEMA.position("billsec"), Some(13));
        assert_eq!(CDR_SCHEMA.position("userfield"), Some(17));
        assert_eq!(CEL_SCHEMA.position("eventtype"), Some(0));
        assert_eq!(CEL_SCHEMA.position("eventextra"), Some(19));
    }

    #[test]
    fn test_require_unknown_field() {
        assert!(CDR_SCHEMA.require("duration").is_ok());
        let err = CDR_SCHEMA.require("eventtype").unwrap_err();
        assert!(matches!(err, AcctError::UnknownField { .. }));
    }

    #[test]
    fn test_kind_round_trip() {
        assert_eq!("cdr".parse::<RecordKind>().unwrap(), RecordKind::Cdr);
        assert_eq!("CEL".parse::<RecordKind>().unwrap(), RecordKind::Cel);
        assert!("cds".parse::<RecordKind>().is_err());
        assert_eq!(RecordKind::Cdr.to_string(), "CDR");
    }

    #[test]
    fn test_kind_schema_binding() {
        assert_eq!(RecordKind::Cdr.schema().kind(), RecordKind::Cdr);
        assert_eq!(RecordKind::Cel.schema().kind(), RecordKind::Cel);
    }
}
