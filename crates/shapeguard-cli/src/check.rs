//! # Check Subcommand
//!
//! Matches one document against one schema literal and prints either `ok`
//! or the location of the first mismatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use shapeguard_core::{find_mismatch, Mismatch};

use crate::document::{load_document, load_schema};
use crate::{EXIT_FAILURE, EXIT_OK};

/// Arguments for the `shapeguard check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema literal file (JSON or YAML).
    #[arg(long)]
    pub schema: PathBuf,

    /// Value file to check (JSON or YAML).
    #[arg(long)]
    pub value: PathBuf,
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let schema = load_schema(&args.schema)?;
    let value = load_document(&args.value)?;
    tracing::debug!(schema = %schema, value = %args.value.display(), "checking document");

    let mismatch = find_mismatch(&value, &schema);
    println!("{}", report_line(mismatch.as_ref()));
    Ok(if mismatch.is_none() { EXIT_OK } else { EXIT_FAILURE })
}

/// The single output line for a check result.
pub fn report_line(mismatch: Option<&Mismatch>) -> String {
    match mismatch {
        None => "ok".to_string(),
        Some(mismatch) => format!("mismatch at {mismatch}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use shapeguard_core::Schema;

    fn check_report(value: &Value, schema: &Schema) -> String {
        report_line(find_mismatch(value, schema).as_ref())
    }

    #[test]
    fn report_ok() {
        let schema = Schema::structure([("id", Schema::number())]);
        assert_eq!(check_report(&json!({"id": 1, "x": 2}), &schema), "ok");
    }

    #[test]
    fn report_mismatch_line() {
        let schema = Schema::structure([("tags", Schema::sequence(Schema::string()))]);
        assert_eq!(
            check_report(&json!({"tags": ["a", 1]}), &schema),
            r#"mismatch at /tags/1: expected "string", found number"#
        );
    }

    #[test]
    fn run_check_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let schema = dir.path().join("schema.json");
        let good = dir.path().join("good.yaml");
        let bad = dir.path().join("bad.json");
        std::fs::write(&schema, r#"{"id": "number"}"#).unwrap();
        std::fs::write(&good, "id: 7\n").unwrap();
        std::fs::write(&bad, r#"{"id": "7"}"#).unwrap();

        let ok = run_check(&CheckArgs {
            schema: schema.clone(),
            value: good,
        })
        .unwrap();
        assert_eq!(ok, EXIT_OK);

        let failed = run_check(&CheckArgs { schema, value: bad }).unwrap();
        assert_eq!(failed, EXIT_FAILURE);
    }
}
