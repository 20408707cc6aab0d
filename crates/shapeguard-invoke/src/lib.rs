//! # shapeguard-invoke — Guarded Invocation
//!
//! Validates a list of arguments against a list of [`Schema`]s, then
//! calls a target operation with them. Every failure is one of three
//! kinds ([`FailureKind`]) and flows through a single [`ErrorPolicy`]
//! chosen by the caller.
//!
//! ## Pipeline
//!
//! 1. **Arity**: schema count must equal argument count.
//! 2. **Positional validation**: arguments are matched in ascending
//!    index order; the first mismatch stops the call.
//! 3. **Delegated invocation**: the operation receives the arguments in
//!    order. An `Err` it returns is an execution failure.
//!
//! ## Error Policy
//!
//! - [`ErrorPolicy::Propagate`] returns the [`GuardError`] to the caller.
//! - [`ErrorPolicy::ReportAndSuppress`] writes the failure message to a
//!   [`DiagnosticSink`] and returns [`Invocation::Suppressed`], so a failed
//!   call is never confused with an operation that returned nothing.
//!
//! ```
//! use serde_json::json;
//! use shapeguard_core::Schema;
//! use shapeguard_invoke::{invoke_guarded, ErrorPolicy, Invocation};
//!
//! let schemas = [Schema::number()];
//! let outcome = invoke_guarded(
//!     &schemas,
//!     vec![json!(42)],
//!     |args| Ok::<_, String>(args[0].clone()),
//!     &ErrorPolicy::Propagate,
//! );
//! assert_eq!(outcome.unwrap(), Invocation::Completed(json!(42)));
//! ```
//!
//! [`Schema`]: shapeguard_core::Schema

pub mod error;
pub mod guard;
pub mod policy;
pub mod sink;

pub use error::{FailureKind, GuardError};
pub use guard::{check_args, invoke_guarded, Guard, Invocation};
pub use policy::ErrorPolicy;
pub use sink::{DiagnosticSink, MemorySink, StderrSink, TracingSink};
