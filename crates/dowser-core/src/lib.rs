//! Core data model for the Dowser search combinator library.
//!
//! This crate provides the canonical type definitions used throughout the
//! Dowser pipeline: the heterogeneous [`Value`] tree, the closed
//! [`ValueKind`] classification, opaque callable leaves ([`Thunk`]), and
//! structured error reporting ([`SearchError`]).  It is re-exported by the
//! `dowser` facade crate for stable public consumption.
//!
//! # Core types
//!
//! - [`Value`] — a heterogeneous tree of scalars, records, and sequences
//! - [`ValueKind`] — the six-way classification a dispatcher routes on
//! - [`Thunk`] — an opaque callable leaf, compared by identity
//! - [`SearchError`] — errors raised during dispatch or serialisation
//!
//! # Example
//!
//! ```
//! use dowser_core::{Value, ValueKind};
//!
//! let tree = Value::from(vec![Value::from("leaf"), Value::from(true)]);
//! assert_eq!(tree.kind(), ValueKind::Sequence);
//! assert_eq!(tree.children().count(), 2);
//! ```

mod error;
mod value;

pub use error::SearchError;
pub use value::{Children, Thunk, Value, ValueKind};

#[cfg(test)]
mod tests;
