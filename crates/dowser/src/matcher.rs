//! The matcher, its builder, and the per-invocation traversal context.
//!
//! A [`Matcher`] is an immutable dispatch table mapping each [`ValueKind`]
//! to at most one [`Strategy`].  Configuration happens once through
//! [`MatcherBuilder`]; searching allocates a fresh [`Walk`] per root call,
//! so concurrent searches on a shared matcher never interfere with each
//! other's depth bookkeeping.

use std::fmt;
use std::sync::Arc;

use dowser_core::{SearchError, Value, ValueKind};

use crate::field::field_or_else;

/// A per-kind search strategy.
///
/// A strategy receives the traversal context and the value routed to it,
/// and returns `Ok(Some(found))` on a match, `Ok(None)` for no match, or
/// an error.  `None` is the one unambiguous no-match sentinel: `false`,
/// `0`, empty text, and empty structures are all legitimate matches.
///
/// Strategies that probe children call back into [`Walk::descend`], and
/// are responsible for snapshotting and rewinding depth around each probe
/// via [`Walk::depth`] and [`Walk::rewind`].
pub type Strategy =
    Arc<dyn Fn(&mut Walk<'_>, &Value) -> Result<Option<Value>, SearchError> + Send + Sync>;

/// One optional strategy slot per value kind.
#[derive(Clone, Default)]
struct StrategyTable {
    text: Option<Strategy>,
    number: Option<Strategy>,
    boolean: Option<Strategy>,
    callable: Option<Strategy>,
    record: Option<Strategy>,
    sequence: Option<Strategy>,
}

impl StrategyTable {
    fn slot(&self, kind: ValueKind) -> Option<&Strategy> {
        match kind {
            ValueKind::Text => self.text.as_ref(),
            ValueKind::Number => self.number.as_ref(),
            ValueKind::Boolean => self.boolean.as_ref(),
            ValueKind::Callable => self.callable.as_ref(),
            ValueKind::Record => self.record.as_ref(),
            ValueKind::Sequence => self.sequence.as_ref(),
        }
    }

    fn slot_mut(&mut self, kind: ValueKind) -> &mut Option<Strategy> {
        match kind {
            ValueKind::Text => &mut self.text,
            ValueKind::Number => &mut self.number,
            ValueKind::Boolean => &mut self.boolean,
            ValueKind::Callable => &mut self.callable,
            ValueKind::Record => &mut self.record,
            ValueKind::Sequence => &mut self.sequence,
        }
    }
}

/// Builder accumulating per-kind strategy assignments for a [`Matcher`].
///
/// Setters consume and return the builder so assignments chain; `build`
/// freezes the table.  A kind left unassigned is not a build error: it
/// surfaces as [`SearchError::MissingStrategy`] if a search ever routes a
/// value of that kind.
///
/// # Example
///
/// ```
/// use dowser::{MatcherBuilder, ValueKind, deepest_match, of_kind};
///
/// let matcher = MatcherBuilder::new()
///     .scalars(of_kind(ValueKind::Boolean))
///     .structures(deepest_match())
///     .build();
/// let root = serde_json::from_str::<dowser::Value>(r#"[1, [true]]"#)?;
/// assert_eq!(matcher.search(&root)?, Some(dowser::Value::from(true)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Default)]
pub struct MatcherBuilder {
    table: StrategyTable,
}

impl MatcherBuilder {
    /// Creates a builder with no strategies assigned.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder whose record slot prefers the named field,
    /// falling back to `fallback` over the whole record.
    ///
    /// Equivalent to `MatcherBuilder::new().record(field_or_else(name,
    /// fallback))`.
    #[must_use]
    pub fn for_field(name: impl Into<String>, fallback: Strategy) -> Self {
        Self::new().record(field_or_else(name, fallback))
    }

    /// Creates a builder whose record slot is `strategy` directly.
    #[must_use]
    pub fn for_handler(strategy: Strategy) -> Self {
        Self::new().record(strategy)
    }

    /// Assigns `strategy` to an arbitrary kind.
    #[must_use]
    pub fn assign(mut self, kind: ValueKind, strategy: Strategy) -> Self {
        *self.table.slot_mut(kind) = Some(strategy);
        self
    }

    /// Assigns the text strategy.
    #[must_use]
    pub fn text(self, strategy: Strategy) -> Self {
        self.assign(ValueKind::Text, strategy)
    }

    /// Assigns the number strategy.
    #[must_use]
    pub fn number(self, strategy: Strategy) -> Self {
        self.assign(ValueKind::Number, strategy)
    }

    /// Assigns the boolean strategy.
    #[must_use]
    pub fn boolean(self, strategy: Strategy) -> Self {
        self.assign(ValueKind::Boolean, strategy)
    }

    /// Assigns the callable strategy.
    #[must_use]
    pub fn callable(self, strategy: Strategy) -> Self {
        self.assign(ValueKind::Callable, strategy)
    }

    /// Assigns the record strategy.
    #[must_use]
    pub fn record(self, strategy: Strategy) -> Self {
        self.assign(ValueKind::Record, strategy)
    }

    /// Assigns the sequence strategy.
    #[must_use]
    pub fn sequence(self, strategy: Strategy) -> Self {
        self.assign(ValueKind::Sequence, strategy)
    }

    /// Assigns one strategy to all three scalar kinds at once.
    #[must_use]
    pub fn scalars(self, strategy: Strategy) -> Self {
        self.text(Arc::clone(&strategy))
            .number(Arc::clone(&strategy))
            .boolean(strategy)
    }

    /// Assigns one strategy to both structural kinds at once.
    #[must_use]
    pub fn structures(self, strategy: Strategy) -> Self {
        self.record(Arc::clone(&strategy)).sequence(strategy)
    }

    /// Freezes the accumulated assignments into an immutable [`Matcher`].
    #[must_use]
    pub fn build(self) -> Matcher {
        Matcher { table: self.table }
    }
}

/// An immutable, configured dispatcher over value trees.
///
/// Constructed via [`MatcherBuilder`]; never mutated afterwards.  Each
/// search allocates a fresh [`Walk`], so one matcher may serve any number
/// of sequential or concurrent root searches.
#[derive(Clone)]
pub struct Matcher {
    table: StrategyTable,
}

impl Matcher {
    /// Returns a builder with no strategies assigned.
    #[must_use]
    pub fn builder() -> MatcherBuilder {
        MatcherBuilder::new()
    }

    /// Searches `root`, returning the matched value or `None`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingStrategy`] if the search routes a
    /// value whose kind has no assigned strategy.
    pub fn search(&self, root: &Value) -> Result<Option<Value>, SearchError> {
        self.walk().dispatch(root)
    }

    /// Returns a fresh traversal context for this matcher.
    ///
    /// Useful for callers that need the final depth after dispatching the
    /// root themselves.
    #[must_use]
    pub const fn walk(&self) -> Walk<'_> {
        Walk {
            matcher: self,
            depth: 0,
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assigned: Vec<ValueKind> = ValueKind::ALL
            .into_iter()
            .filter(|kind| self.table.slot(*kind).is_some())
            .collect();
        f.debug_struct("Matcher").field("assigned", &assigned).finish()
    }
}

/// A per-invocation traversal context.
///
/// Holds the recursion depth for one root search.  The root value sits at
/// depth 0; [`descend`](Self::descend) counts one descent per child probe,
/// whether or not the probe matches.  Depth is never restored implicitly:
/// strategies snapshot it with [`depth`](Self::depth) and restore it with
/// [`rewind`](Self::rewind) around each failed probe, so only the path to
/// a winning branch leaves a depth trace.
#[derive(Debug)]
pub struct Walk<'a> {
    matcher: &'a Matcher,
    depth: u32,
}

impl Walk<'_> {
    /// Routes `value` to the strategy for its kind without counting a
    /// descent.  This is the entry point for the root of a search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingStrategy`] if the kind of `value` has
    /// no assigned strategy.
    pub fn dispatch(&mut self, value: &Value) -> Result<Option<Value>, SearchError> {
        let kind = value.kind();
        let matcher = self.matcher;
        let strategy = matcher
            .table
            .slot(kind)
            .ok_or_else(|| SearchError::missing_strategy(kind))?;
        strategy(self, value)
    }

    /// Counts one descent, then dispatches `value`.
    ///
    /// Depth increases even when the dispatch fails to match or errors:
    /// depth counts calls made, not successes.  The caller is responsible
    /// for rewinding after a failed probe.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingStrategy`] if the kind of `value` has
    /// no assigned strategy.
    pub fn descend(&mut self, value: &Value) -> Result<Option<Value>, SearchError> {
        self.depth += 1;
        self.dispatch(value)
    }

    /// Returns the current depth (descents made on the winning-so-far
    /// path).  Strategies use this to snapshot before probing a child.
    #[must_use]
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Restores depth to a snapshot taken with [`depth`](Self::depth).
    pub const fn rewind(&mut self, depth: u32) {
        self.depth = depth;
    }
}
