//! # Guard Subcommand
//!
//! Runs a guarded call whose operation echoes its validated arguments as a
//! JSON array. With `--fail-with` the operation fails instead, which
//! exercises the execution-failure path.
//!
//! Without `--raise` a failure is written to stderr as its one-line
//! message and the command exits 1. With `--raise` the failure is
//! returned as an error.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use serde_json::Value;
use shapeguard_core::Schema;
use shapeguard_invoke::{invoke_guarded, ErrorPolicy, Invocation, StderrSink};

use crate::document::{load_argument_list, load_schema_list};
use crate::{EXIT_FAILURE, EXIT_OK};

/// Arguments for the `shapeguard guard` subcommand.
#[derive(Args, Debug)]
pub struct GuardArgs {
    /// File holding an array of schema literals, one per argument.
    #[arg(long)]
    pub schemas: PathBuf,

    /// File holding an array of argument values.
    #[arg(long)]
    pub args: PathBuf,

    /// Return failures as errors instead of reporting them on stderr.
    #[arg(long)]
    pub raise: bool,

    /// Make the operation fail with this message after validation passes.
    #[arg(long)]
    pub fail_with: Option<String>,
}

/// Execute the guard subcommand.
pub fn run_guard(args: &GuardArgs) -> Result<u8> {
    let schemas = load_schema_list(&args.schemas)?;
    let arguments = load_argument_list(&args.args)?;
    let policy = if args.raise {
        ErrorPolicy::Propagate
    } else {
        ErrorPolicy::report_to(Arc::new(StderrSink))
    };

    match guarded_echo(&schemas, arguments, args.fail_with.as_deref(), &policy)? {
        Invocation::Completed(echoed) => {
            println!("{}", serde_json::to_string_pretty(&echoed)?);
            Ok(EXIT_OK)
        }
        Invocation::Suppressed(kind) => {
            tracing::debug!(kind = %kind, "guarded call suppressed");
            Ok(EXIT_FAILURE)
        }
    }
}

/// Guarded call of the echo operation.
pub fn guarded_echo(
    schemas: &[Schema],
    arguments: Vec<Value>,
    fail_with: Option<&str>,
    policy: &ErrorPolicy,
) -> Result<Invocation<Value>> {
    let outcome = invoke_guarded(
        schemas,
        arguments,
        |validated| match fail_with {
            Some(message) => Err(message.to_string()),
            None => Ok(Value::Array(validated)),
        },
        policy,
    )?;
    Ok(outcome)
}
