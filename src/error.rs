//! Error types for the partial application engine.
//!
//! The engine raises exactly one kind of error of its own,
//! [`Error::InvalidArgument`], and only at construction time. Everything a
//! wrapped callable raises during a terminal invocation is passed through
//! untouched.

use crate::value::Value;

/// Represents errors produced by the engine or raised by host callables.
///
/// # Examples
///
/// ```rust
/// use curried::{Error, Value, curry};
///
/// let error = curry(Value::from(42)).unwrap_err();
/// assert!(error.is_invalid_argument());
/// assert_eq!(format!("{error}"), "curry: expected a callable, got number");
/// ```
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// A constructor received a non-callable, an invalid arity or an unusable
    /// context.
    #[error("{operation}: {reason}")]
    InvalidArgument {
        /// The public operation that rejected its input.
        operation: &'static str,
        /// Human readable description of the rejected input.
        reason: String,
    },
    /// A host-level error value raised by a native callable.
    #[error("raised {0}")]
    Raised(Value),
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] for the given operation.
    pub fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::Raised`] carrying a host value.
    ///
    /// ```rust
    /// use curried::{Error, Value};
    ///
    /// let error = Error::raise("boom");
    /// assert_eq!(error.raised_value(), Some(&Value::from("boom")));
    /// ```
    pub fn raise(value: impl Into<Value>) -> Self {
        Self::Raised(value.into())
    }

    /// Returns `true` if this is an [`Error::InvalidArgument`].
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns the raised host value, if any.
    pub const fn raised_value(&self) -> Option<&Value> {
        match self {
            Self::Raised(value) => Some(value),
            Self::InvalidArgument { .. } => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
