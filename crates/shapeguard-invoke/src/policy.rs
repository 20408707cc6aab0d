//! # Error Policy
//!
//! Selects, once per call, what happens to any failure of a guarded call.
//! The policy applies uniformly to arity, type, and execution failures.

use std::fmt;
use std::sync::Arc;

use crate::error::GuardError;
use crate::guard::Invocation;
use crate::sink::{DiagnosticSink, TracingSink};

/// What a guarded call does with a failure.
#[derive(Clone)]
pub enum ErrorPolicy {
    /// Return the failure to the caller as `Err(GuardError)`.
    Propagate,
    /// Report the failure message to the sink and return
    /// [`Invocation::Suppressed`].
    ReportAndSuppress(Arc<dyn DiagnosticSink>),
}

impl ErrorPolicy {
    /// Map a raise/log flag: `true` propagates, `false` reports to the
    /// default [`TracingSink`].
    pub fn from_raise_flag(raise: bool) -> Self {
        if raise {
            Self::Propagate
        } else {
            Self::default()
        }
    }

    /// Report failures to `sink`.
    pub fn report_to(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self::ReportAndSuppress(sink)
    }

    /// Whether failures are returned to the caller.
    pub fn propagates(&self) -> bool {
        matches!(self, Self::Propagate)
    }

    /// Apply the policy to a failure.
    pub(crate) fn handle<T, E>(&self, err: GuardError<E>) -> Result<Invocation<T>, GuardError<E>>
    where
        E: fmt::Display,
    {
        match self {
            Self::Propagate => Err(err),
            Self::ReportAndSuppress(sink) => {
                let kind = err.kind();
                tracing::debug!(kind = %kind, "guarded call failed; reporting and suppressing");
                sink.report(&err.to_string());
                Ok(Invocation::Suppressed(kind))
            }
        }
    }
}

impl Default for ErrorPolicy {
    /// Report to [`TracingSink`] and suppress.
    fn default() -> Self {
        Self::ReportAndSuppress(Arc::new(TracingSink))
    }
}

impl fmt::Debug for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Propagate => f.write_str("Propagate"),
            Self::ReportAndSuppress(_) => f.write_str("ReportAndSuppress(..)"),
        }
    }
}
