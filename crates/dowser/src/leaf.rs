//! Terminal strategies for scalar and callable leaves.
//!
//! Leaf strategies are pure predicates: they never probe children and never
//! touch the traversal depth.

use std::sync::Arc;

use dowser_core::{Value, ValueKind};

use crate::matcher::Strategy;

/// Matches every value it is routed, returning it unchanged.
#[must_use]
pub fn identity() -> Strategy {
    Arc::new(|_walk, value| Ok(Some(value.clone())))
}

/// Matches iff the value equals `reference` in both value and kind.
///
/// `Number(1.0)` never equals `Text("1")`, and callables compare by
/// identity, so cross-kind coincidences cannot match.
///
/// # Example
///
/// ```
/// use dowser::{MatcherBuilder, Value, equal_to, first_match};
///
/// let matcher = MatcherBuilder::new()
///     .scalars(equal_to(Value::from("needle")))
///     .structures(first_match())
///     .build();
/// let root = Value::from(vec![Value::from("hay"), Value::from("needle")]);
/// assert_eq!(matcher.search(&root)?, Some(Value::from("needle")));
/// # Ok::<(), dowser::SearchError>(())
/// ```
#[must_use]
pub fn equal_to(reference: Value) -> Strategy {
    Arc::new(move |_walk, value| Ok((*value == reference).then(|| value.clone())))
}

/// Matches iff the value's kind equals `expected`.
///
/// Matches legitimate falsy payloads too: `of_kind(ValueKind::Boolean)`
/// matches `false`, which is distinct from no match.
#[must_use]
pub fn of_kind(expected: ValueKind) -> Strategy {
    Arc::new(move |_walk, value| Ok((value.kind() == expected).then(|| value.clone())))
}
