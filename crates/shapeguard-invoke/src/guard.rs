//! # Guarded Calls
//!
//! [`invoke_guarded`] runs the three-phase pipeline once; [`Guard`] holds a
//! schema list and policy for repeated calls of the same signature.
//!
//! The operation is any `FnOnce(Vec<Value>) -> Result<T, E>`. It receives
//! the validated arguments in their original order and is called at most
//! once. A panic inside the operation is not caught.

use std::convert::Infallible;
use std::fmt;

use serde_json::Value;
use shapeguard_core::{find_mismatch, Schema};

use crate::error::{FailureKind, GuardError};
use crate::policy::ErrorPolicy;

/// Outcome of a guarded call that did not propagate an error.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Invocation<T> {
    /// The operation ran and returned this value.
    Completed(T),
    /// A failure of this kind was reported to the sink.
    Suppressed(FailureKind),
}

impl<T> Invocation<T> {
    /// The operation's result, or `None` if the call was suppressed.
    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Suppressed(_) => None,
        }
    }

    /// Whether the operation ran to completion.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// The suppressed failure kind, if any.
    pub fn failure(&self) -> Option<FailureKind> {
        match self {
            Self::Completed(_) => None,
            Self::Suppressed(kind) => Some(*kind),
        }
    }

    /// Transform a completed value.
    pub fn map<U, F>(self, f: F) -> Invocation<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Completed(value) => Invocation::Completed(f(value)),
            Self::Suppressed(kind) => Invocation::Suppressed(kind),
        }
    }
}

/// Run phases 1 and 2: arity, then positional matching.
///
/// # Errors
///
/// - [`GuardError::ArityMismatch`] when `schemas.len() != args.len()`.
/// - [`GuardError::TypeMismatch`] for the lowest failing index. Later
///   arguments are not examined.
pub fn check_args<E>(schemas: &[Schema], args: &[Value]) -> Result<(), GuardError<E>> {
    if schemas.len() != args.len() {
        tracing::debug!(
            expected = schemas.len(),
            actual = args.len(),
            "argument count does not match schema count"
        );
        return Err(GuardError::ArityMismatch {
            expected: schemas.len(),
            actual: args.len(),
        });
    }

    for (index, (schema, arg)) in schemas.iter().zip(args).enumerate() {
        if let Some(mismatch) = find_mismatch(arg, schema) {
            tracing::debug!(index, %mismatch, "argument does not match its schema");
            return Err(GuardError::TypeMismatch {
                index,
                value: arg.clone(),
                mismatch,
            });
        }
    }

    Ok(())
}

/// Validate `args` against `schemas`, then call `operation` with them.
///
/// Failures of any phase are handled by `policy`: propagated as `Err`, or
/// reported to a sink and returned as [`Invocation::Suppressed`]. A
/// successful call returns the operation's value unchanged in
/// [`Invocation::Completed`].
///
/// # Errors
///
/// Only under [`ErrorPolicy::Propagate`]; see [`GuardError`].
pub fn invoke_guarded<T, E, F>(
    schemas: &[Schema],
    args: Vec<Value>,
    operation: F,
    policy: &ErrorPolicy,
) -> Result<Invocation<T>, GuardError<E>>
where
    F: FnOnce(Vec<Value>) -> Result<T, E>,
    E: fmt::Display,
{
    let result = check_args(schemas, &args)
        .and_then(|()| operation(args).map_err(GuardError::Execution));

    match result {
        Ok(value) => Ok(Invocation::Completed(value)),
        Err(err) => policy.handle(err),
    }
}

/// A reusable argument signature: schemas plus an error policy.
///
/// ```
/// use serde_json::json;
/// use shapeguard_core::Schema;
/// use shapeguard_invoke::Guard;
///
/// let guard = Guard::new([Schema::string(), Schema::number()]).raising();
/// let greeting = guard
///     .invoke(vec![json!("ada"), json!(3)], |args| {
///         Ok::<_, String>(format!("{} x{}", args[0].as_str().unwrap_or(""), args[1]))
///     })
///     .unwrap()
///     .completed();
/// assert_eq!(greeting.as_deref(), Some("ada x3"));
/// ```
#[derive(Debug, Clone)]
pub struct Guard {
    schemas: Vec<Schema>,
    policy: ErrorPolicy,
}

impl Guard {
    /// A guard over `schemas` using the default (report) policy.
    pub fn new(schemas: impl IntoIterator<Item = Schema>) -> Self {
        Self {
            schemas: schemas.into_iter().collect(),
            policy: ErrorPolicy::default(),
        }
    }

    /// Replace the error policy.
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Switch to [`ErrorPolicy::Propagate`].
    pub fn raising(self) -> Self {
        self.with_policy(ErrorPolicy::Propagate)
    }

    /// The argument schemas, in positional order.
    pub fn schemas(&self) -> &[Schema] {
        &self.schemas
    }

    /// Number of arguments the guard expects.
    pub fn arity(&self) -> usize {
        self.schemas.len()
    }

    /// The active error policy.
    pub fn policy(&self) -> &ErrorPolicy {
        &self.policy
    }

    /// Validate `args` without invoking anything. Ignores the policy.
    pub fn check_args(&self, args: &[Value]) -> Result<(), GuardError<Infallible>> {
        check_args(&self.schemas, args)
    }

    /// Validate `args` and call `operation`, under this guard's policy.
    pub fn invoke<T, E, F>(
        &self,
        args: Vec<Value>,
        operation: F,
    ) -> Result<Invocation<T>, GuardError<E>>
    where
        F: FnOnce(Vec<Value>) -> Result<T, E>,
        E: fmt::Display,
    {
        invoke_guarded(&self.schemas, args, operation, &self.policy)
    }
}
