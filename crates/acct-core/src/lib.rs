//! # callcheck-acct-core
//!
//! CDR/CEL accounting-record model and flexible matching engine.
//!
//! Telephony test harnesses verify that a call scenario produced the expected
//! sequence of accounting records. This crate is the verification core: it
//! parses fixed-schema, comma-delimited Call Detail Record (CDR) and Call
//! Event Log (CEL) files into structured records, and matches them — one
//! record or a whole ordered log — against partially specified expectation
//! patterns under configurable strictness, returning a boolean verdict plus a
//! structured diagnostic trail.
//!
//! What this crate deliberately does not do: execute test scenarios, speak
//! any management protocol, generate accounting data, or schedule anything.
//! Those live in the surrounding test framework, which hands files to this
//! core and consumes its verdicts.
//!
//! ## Usage
//!
//! ```rust
//! use callcheck_acct_core::{Exactness, Pattern, RecordKind, RecordSet};
//!
//! let log = ",101,201,default,,SIP/101-00000000,,hangup,,\
//!            2025-01-05 12:00:00,2025-01-05 12:00:00,2025-01-05 12:00:07,\
//!            7,7,ANSWERED,DOCUMENTATION,1736078400.0,";
//! let cdr = RecordSet::from_contents(log, RecordKind::Cdr)?;
//!
//! let expected = Pattern::new(RecordKind::Cdr)
//!     .field("duration", "7")?
//!     .field("disposition", "ANSWERED")?;
//! assert!(cdr[0].matches(&expected, Exactness::full(), true));
//! assert_eq!(cdr[0].field("billsec")?, "7");
//! # Ok::<(), callcheck_acct_core::AcctError>(())
//! ```
//!
//! Matching is synchronous and allocation-light: one forward pass over the
//! file at parse time, one forward pass per sequence match. Records and
//! record sets are immutable once constructed, so sharing them read-only
//! across parallel test cases needs no locking.

pub mod error;
pub mod export;
pub mod matcher;
pub mod parser;
pub mod record;
pub mod recordset;
pub mod report;
pub mod schema;

pub use error::{AcctError, Result};
pub use export::{Projection, CDR_BASE_COLUMNS, CEL_BASE_COLUMNS};
pub use matcher::{match_record, match_sequence, Exactness, FieldDiff, MatchReport};
pub use record::{Pattern, Record};
pub use recordset::RecordSet;
pub use report::Reporter;
pub use schema::{RecordKind, Schema, CDR_FIELDS, CEL_FIELDS};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
