//! Dowser: a recursive-descent search combinator library for heterogeneous
//! value trees.
//!
//! A [`Matcher`] routes each value in a tree to a strategy chosen by the
//! value's kind.  Leaf strategies decide whether a scalar is the sought
//! datum; selection policies ([`first_match`], [`deepest_match`],
//! [`shallowest_match`]) probe a structure's children recursively and pick
//! which child's result propagates; [`field_or_else`] prefers one named
//! record field before widening the search.  Matches are ranked by
//! recursion depth, tracked per root search by a [`Walk`].
//!
//! This facade crate re-exports the stable types from [`dowser_core`] and
//! is the only intended public entrypoint.
//!
//! # Core types
//!
//! - [`Value`] and [`ValueKind`] — the heterogeneous tree and its kinds
//! - [`Matcher`] and [`MatcherBuilder`] — immutable dispatch table and its
//!   builder
//! - [`Walk`] — per-invocation traversal context holding the depth counter
//! - [`Strategy`] — the per-kind handler signature
//! - [`SearchError`] — dispatch failures
//!
//! # Example
//!
//! ```
//! use dowser::{MatcherBuilder, Value, ValueKind, deepest_match, of_kind};
//!
//! let root: Value = serde_json::from_str(
//!     r#"{
//!         "supportsExtendedSearch": false,
//!         "array": ["list of things", 1234, {
//!             "deeper": {"supported": false},
//!             "supported": true
//!         }]
//!     }"#,
//! )?;
//!
//! let matcher = MatcherBuilder::for_field("supported", deepest_match())
//!     .sequence(deepest_match())
//!     .scalars(of_kind(ValueKind::Boolean))
//!     .build();
//!
//! assert_eq!(matcher.search(&root)?, Some(Value::from(true)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod aggregate;
mod field;
mod leaf;
mod matcher;

// Re-export all stable types from dowser_core.
pub use dowser_core::{Children, SearchError, Thunk, Value, ValueKind};

pub use aggregate::{deepest_match, first_match, shallowest_match};
pub use field::field_or_else;
pub use leaf::{equal_to, identity, of_kind};
pub use matcher::{Matcher, MatcherBuilder, Strategy, Walk};

#[cfg(test)]
mod tests;
