//! Selection policies over a structural value's children.
//!
//! Each policy probes the children of a record or sequence through
//! [`Walk::descend`], snapshotting depth before every probe and rewinding
//! after failed ones so sibling probes never see depth left behind by a
//! failed branch.  Applied to a leaf value (no children), every policy
//! resolves to no match.

use std::sync::Arc;

use dowser_core::{SearchError, Value};

use crate::matcher::{Strategy, Walk};

/// A matched child together with the depth its match was found at.
struct Candidate {
    value: Value,
    depth: u32,
}

/// Returns the first matching child in iteration order.
///
/// Short-circuits: remaining children are never probed, and the winning
/// probe's depth is deliberately left in place rather than rewound, unlike
/// the exhaustive policies which rewind and then reset to the winner.
#[must_use]
pub fn first_match() -> Strategy {
    Arc::new(|walk, value| {
        for child in value.children() {
            let mark = walk.depth();
            if let Some(found) = walk.descend(child)? {
                return Ok(Some(found));
            }
            walk.rewind(mark);
        }
        Ok(None)
    })
}

/// Returns the matching child found at the greatest depth.
///
/// Exhaustive: every child is probed.  Ties go to the earliest candidate
/// in iteration order.  On a win, depth is set to the winner's depth; with
/// no candidates, depth stays at the pre-scan snapshot and the result is
/// no match.
///
/// # Example
///
/// ```
/// use dowser::{MatcherBuilder, Value, ValueKind, deepest_match, of_kind};
///
/// let matcher = MatcherBuilder::new()
///     .scalars(of_kind(ValueKind::Boolean))
///     .structures(deepest_match())
///     .build();
/// let root: Value = serde_json::from_str("[true, [false]]")?;
/// // The nested `false` sits one level deeper than the direct `true`.
/// assert_eq!(matcher.search(&root)?, Some(Value::from(false)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn deepest_match() -> Strategy {
    Arc::new(|walk, value| select(walk, value, Extremum::Deepest))
}

/// Returns the matching child found at the smallest depth.
///
/// Identical to [`deepest_match`] except for the direction of the
/// comparison.
#[must_use]
pub fn shallowest_match() -> Strategy {
    Arc::new(|walk, value| select(walk, value, Extremum::Shallowest))
}

#[derive(Clone, Copy)]
enum Extremum {
    Deepest,
    Shallowest,
}

impl Extremum {
    /// Strict comparison, so the first-seen candidate wins ties.
    const fn prefers(self, candidate: u32, best: u32) -> bool {
        match self {
            Self::Deepest => candidate > best,
            Self::Shallowest => candidate < best,
        }
    }
}

/// Linear best-so-far scan over the children of `value`.
fn select(
    walk: &mut Walk<'_>,
    value: &Value,
    extremum: Extremum,
) -> Result<Option<Value>, SearchError> {
    let mut best: Option<Candidate> = None;
    for child in value.children() {
        let mark = walk.depth();
        if let Some(found) = walk.descend(child)? {
            let depth = walk.depth();
            if best
                .as_ref()
                .is_none_or(|current| extremum.prefers(depth, current.depth))
            {
                best = Some(Candidate {
                    value: found,
                    depth,
                });
            }
        }
        walk.rewind(mark);
    }

    // Zero candidates leaves depth at the pre-scan snapshot; a winner
    // re-establishes the depth its match was found at.
    Ok(best.map(|winner| {
        walk.rewind(winner.depth);
        winner.value
    }))
}
