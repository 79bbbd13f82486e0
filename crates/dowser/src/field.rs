//! The field-shortcut strategy for records.

use std::sync::Arc;

use crate::matcher::Strategy;

/// Tries the named field first, recursing fully into its substructure;
/// only if that yields nothing is `fallback` applied to the whole record.
///
/// A match found under the named field returns immediately and leaves the
/// successful path's depth in place.  When the field probe fails, depth is
/// rewound before the fallback runs.  On a non-record value, or when the
/// field is absent, the fallback applies directly.
///
/// # Example
///
/// ```
/// use dowser::{MatcherBuilder, Value, ValueKind, deepest_match, field_or_else, of_kind};
///
/// let matcher = MatcherBuilder::new()
///     .record(field_or_else("flag", deepest_match()))
///     .sequence(deepest_match())
///     .scalars(of_kind(ValueKind::Boolean))
///     .build();
/// let root: Value = serde_json::from_str(r#"{"other": 1, "flag": true}"#)?;
/// assert_eq!(matcher.search(&root)?, Some(Value::from(true)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn field_or_else(name: impl Into<String>, fallback: Strategy) -> Strategy {
    let field_name = name.into();
    Arc::new(move |walk, value| {
        let mark = walk.depth();
        if let Some(child) = value.field(&field_name) {
            if let Some(found) = walk.descend(child)? {
                return Ok(Some(found));
            }
            walk.rewind(mark);
        }
        fallback(walk, value)
    })
}
