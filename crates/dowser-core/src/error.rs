//! Error types for search dispatch and serialisation.

use thiserror::Error;

use crate::value::ValueKind;

/// Errors raised while dispatching a search or serialising a value tree.
///
/// # Example
///
/// ```
/// use dowser_core::{SearchError, ValueKind};
///
/// let err = SearchError::missing_strategy(ValueKind::Record);
/// assert_eq!(format!("{err}"), "no strategy assigned for record values");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The dispatcher reached a value whose kind has no assigned strategy.
    ///
    /// There is no implicit default strategy; this is fatal for the
    /// invocation that raised it.
    #[error("no strategy assigned for {kind} values")]
    MissingStrategy {
        /// Kind of the value that could not be dispatched.
        kind: ValueKind,
    },

    /// A value of this kind cannot be serialised (callables are opaque).
    #[error("{kind} values cannot be serialised")]
    Unserialisable {
        /// Kind of the value that blocked serialisation.
        kind: ValueKind,
    },
}

impl SearchError {
    /// Creates a new `MissingStrategy` error.
    #[must_use]
    pub const fn missing_strategy(kind: ValueKind) -> Self {
        Self::MissingStrategy { kind }
    }

    /// Creates a new `Unserialisable` error.
    #[must_use]
    pub const fn unserialisable(kind: ValueKind) -> Self {
        Self::Unserialisable { kind }
    }
}
