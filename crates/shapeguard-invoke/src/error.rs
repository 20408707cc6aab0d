//! # Guard Errors
//!
//! The three failure kinds of a guarded call. `Display` produces the
//! exact diagnostic line written under the report policy, so messages
//! stay stable for log consumers; callers that need to branch should
//! match on the variant or on [`GuardError::kind`] instead.

use serde_json::Value;
use shapeguard_core::{render_value, Mismatch};
use thiserror::Error;

/// Failure of a guarded call. `E` is the operation's own error type.
#[derive(Error, Debug)]
pub enum GuardError<E> {
    /// Schema count differs from argument count.
    #[error("Invalid number of arguments")]
    ArityMismatch {
        /// Number of schemas.
        expected: usize,
        /// Number of arguments supplied.
        actual: usize,
    },

    /// The argument at `index` is the first that does not match its schema.
    #[error(
        "Argument at position index: {index}, value: {} does not match the expected type or structure.",
        render_value(.value)
    )]
    TypeMismatch {
        /// Zero-based position of the argument.
        index: usize,
        /// The argument as supplied.
        value: Value,
        /// Where inside the argument matching failed.
        mismatch: Mismatch,
    },

    /// The operation itself failed. Displays the operation's message verbatim.
    #[error("{0}")]
    Execution(E),
}

/// Which phase of a guarded call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Schema count differs from argument count.
    ArityMismatch,
    /// An argument failed its structural match.
    TypeMismatch,
    /// The operation returned an error.
    ExecutionFailure,
}

impl FailureKind {
    /// Stable snake_case identifier, used as a structured log field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ArityMismatch => "arity_mismatch",
            Self::TypeMismatch => "type_mismatch",
            Self::ExecutionFailure => "execution_failure",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<E> GuardError<E> {
    /// The phase that failed.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::ArityMismatch { .. } => FailureKind::ArityMismatch,
            Self::TypeMismatch { .. } => FailureKind::TypeMismatch,
            Self::Execution(_) => FailureKind::ExecutionFailure,
        }
    }

    /// The operation's error, if the operation failed.
    pub fn into_execution(self) -> Option<E> {
        match self {
            Self::Execution(e) => Some(e),
            _ => None,
        }
    }

    /// Convert a validation failure into one carrying a different
    /// operation error type. Execution failures are mapped with `f`.
    pub fn map_execution<F, E2>(self, f: F) -> GuardError<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::ArityMismatch { expected, actual } => {
                GuardError::ArityMismatch { expected, actual }
            }
            Self::TypeMismatch {
                index,
                value,
                mismatch,
            } => GuardError::TypeMismatch {
                index,
                value,
                mismatch,
            },
            Self::Execution(e) => GuardError::Execution(f(e)),
        }
    }
}
