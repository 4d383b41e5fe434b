//! Fixture projection tool for CDR/CEL accounting files.
//!
//! Reads one comma-delimited accounting file, validates it against the CDR or
//! CEL schema, and emits a key→value JSON export restricted to the chosen
//! columns — the form embedded in declarative test fixtures.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use callcheck_acct_core::{Projection, RecordKind, RecordSet};

#[derive(Parser, Debug)]
#[command(
    name = "callcheck",
    version,
    about = "Project CDR/CEL accounting files into fixture-ready JSON"
)]
struct Args {
    /// Path to the accounting file
    input: PathBuf,

    /// Record kind of the input file (cdr or cel)
    #[arg(long, default_value = "cel")]
    kind: RecordKind,

    /// Columns to project, in output order (defaults to the base set)
    #[arg(long, value_delimiter = ',')]
    columns: Vec<String>,

    /// Write the export here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let set = RecordSet::from_file(&args.input, args.kind)
        .with_context(|| format!("loading {}", args.input.display()))?;
    tracing::debug!("loaded {} {} records", set.len(), set.kind());

    let projection = if args.columns.is_empty() {
        Projection::new(args.kind)
    } else {
        let names: Vec<&str> = args.columns.iter().map(String::as_str).collect();
        Projection::with_columns(args.kind, &names)?
    };

    let json = projection.to_json_string(&set)?;
    match &args.output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(())
}
