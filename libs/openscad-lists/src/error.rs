//! # List Errors
//!
//! Error types for sequence operations.
//!
//! ## Error Policy
//!
//! - Every precondition failure is returned to the caller immediately
//! - No operation clamps, retries or substitutes a default after a failure
//! - Errors carry the operation name and the offending value

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during list operations.
///
/// ## Example
///
/// ```rust
/// use openscad_lists::{list_set, ListError};
///
/// match list_set(&[1, 2, 3], &[0, 0], &[9, 9], &0, 0) {
///     Err(ListError::DuplicateIndex { index, .. }) => assert_eq!(index, 0),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ListError {
    /// Wrong kind or shape of argument.
    #[error("{operation}: invalid argument: {message}")]
    InvalidArgument {
        /// Name of the rejecting operation
        operation: &'static str,
        /// What was wrong with the argument
        message: String,
    },

    /// An item was requested from a list with no items.
    #[error("{operation}: cannot index into an empty list")]
    EmptySequence {
        /// Name of the rejecting operation
        operation: &'static str,
    },

    /// An index or count falls outside what the operation accepts.
    #[error("{operation}: {value} is outside the allowed range {allowed}")]
    IndexOutOfPolicy {
        /// Name of the rejecting operation
        operation: &'static str,
        /// Offending index or count
        value: i64,
        /// Human readable description of the legal range
        allowed: String,
    },

    /// The same index was given twice to a write operation.
    #[error("{operation}: index {index} appears more than once")]
    DuplicateIndex {
        /// Name of the rejecting operation
        operation: &'static str,
        /// The repeated (normalized) index
        index: usize,
    },

    /// Paired inputs have different lengths.
    #[error("{operation}: length mismatch: {expected} expected, got {actual}")]
    LengthMismatch {
        /// Name of the rejecting operation
        operation: &'static str,
        /// Length the operation required
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },
}

impl ListError {
    /// Builds an [`ListError::InvalidArgument`].
    pub fn invalid(operation: &'static str, message: impl Into<String>) -> Self {
        ListError::InvalidArgument {
            operation,
            message: message.into(),
        }
    }

    /// Builds an [`ListError::IndexOutOfPolicy`].
    pub fn out_of_policy(operation: &'static str, value: i64, allowed: impl Into<String>) -> Self {
        ListError::IndexOutOfPolicy {
            operation,
            value,
            allowed: allowed.into(),
        }
    }

    /// Name of the operation that rejected the call.
    pub fn operation(&self) -> &'static str {
        match self {
            ListError::InvalidArgument { operation, .. }
            | ListError::EmptySequence { operation }
            | ListError::IndexOutOfPolicy { operation, .. }
            | ListError::DuplicateIndex { operation, .. }
            | ListError::LengthMismatch { operation, .. } => operation,
        }
    }
}

/// Records a rejected call and hands the error back for `Err(...)`.
pub(crate) fn reject(err: ListError) -> ListError {
    tracing::debug!(operation = err.operation(), error = %err, "list operation rejected");
    err
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for list operations.
pub type ListResult<T> = Result<T, ListError>;

// =============================================================================
// TESTS
// =============================================================================
