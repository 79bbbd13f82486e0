//! The heterogeneous value tree and its six-way kind classification.
//!
//! A [`Value`] is a closed tagged union over the kinds a dispatcher routes
//! on: three scalar kinds (text, number, boolean), an opaque callable kind,
//! and two structural kinds (record, sequence).  Records preserve insertion
//! order so that selection policies with a "first seen wins" tie-break are
//! deterministic.

use std::fmt;
use std::slice;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::SearchError;

/// The kind of a [`Value`], used by dispatchers to select a strategy.
///
/// # Example
///
/// ```
/// use dowser_core::ValueKind;
///
/// assert_eq!(format!("{}", ValueKind::Boolean), "boolean");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// A text scalar.
    Text,
    /// A numeric scalar.
    Number,
    /// A boolean scalar.
    Boolean,
    /// An opaque callable leaf.
    Callable,
    /// A record of named fields.
    Record,
    /// An ordered sequence of values.
    Sequence,
}

impl ValueKind {
    /// All six kinds, in dispatch-table order.
    pub const ALL: [Self; 6] = [
        Self::Text,
        Self::Number,
        Self::Boolean,
        Self::Callable,
        Self::Record,
        Self::Sequence,
    ];

    /// Returns `true` for the scalar kinds (text, number, boolean).
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Text | Self::Number | Self::Boolean)
    }

    /// Returns `true` for the structural kinds (record, sequence).
    #[must_use]
    pub const fn is_structural(self) -> bool {
        matches!(self, Self::Record | Self::Sequence)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Number => f.write_str("number"),
            Self::Boolean => f.write_str("boolean"),
            Self::Callable => f.write_str("callable"),
            Self::Record => f.write_str("record"),
            Self::Sequence => f.write_str("sequence"),
        }
    }
}

/// An opaque callable stored as a leaf in a value tree.
///
/// The dispatcher never invokes a thunk while searching; callables are
/// treated as opaque leaves that strategies may match on kind or identity.
/// Consumers that produced the thunk may invoke it via [`Thunk::call`].
///
/// Equality is pointer identity: a thunk equals itself and its clones,
/// never an independently constructed thunk.
///
/// # Example
///
/// ```
/// use dowser_core::{Thunk, Value};
///
/// let thunk = Thunk::new(|| Value::from(42.0));
/// assert_eq!(thunk, thunk.clone());
/// assert_eq!(thunk.call(), Value::from(42.0));
/// ```
#[derive(Clone)]
pub struct Thunk(Arc<dyn Fn() -> Value + Send + Sync>);

impl Thunk {
    /// Wraps a closure as an opaque callable leaf.
    #[must_use]
    pub fn new(body: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(body))
    }

    /// Invokes the wrapped closure.
    #[must_use]
    pub fn call(&self) -> Value {
        (self.0)()
    }
}

impl fmt::Debug for Thunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Thunk(..)")
    }
}

impl PartialEq for Thunk {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A heterogeneous tree of scalars, callables, records, and sequences.
///
/// Records are insertion-ordered ([`IndexMap`]), so child iteration order —
/// and therefore the "first seen wins" tie-break of exhaustive selection
/// policies — is deterministic.
///
/// # Example
///
/// ```
/// use dowser_core::{Value, ValueKind};
///
/// let value: Value = serde_json::from_str(r#"{"flag": true}"#)?;
/// assert_eq!(value.kind(), ValueKind::Record);
/// assert_eq!(value.field("flag"), Some(&Value::from(true)));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A text scalar.
    Text(String),
    /// A numeric scalar.
    Number(f64),
    /// A boolean scalar.
    Boolean(bool),
    /// An opaque callable leaf.
    Callable(Thunk),
    /// A record of named fields, in insertion order.
    Record(IndexMap<String, Value>),
    /// An ordered sequence of values.
    Sequence(Vec<Value>),
}

impl Value {
    /// Classifies this value into one of the six kinds.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Number(_) => ValueKind::Number,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Callable(_) => ValueKind::Callable,
            Self::Record(_) => ValueKind::Record,
            Self::Sequence(_) => ValueKind::Sequence,
        }
    }

    /// Returns `true` if this value is a scalar (text, number, boolean).
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        self.kind().is_scalar()
    }

    /// Returns `true` if this value is a record or sequence.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        self.kind().is_structural()
    }

    /// Returns the named field of a record, or `None` for absent fields
    /// and non-record values.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Self> {
        match self {
            Self::Record(fields) => fields.get(name),
            _ => None,
        }
    }

    /// Returns an iterator over this value's direct children.
    ///
    /// Sequences yield elements in index order; records yield field values
    /// in insertion order; scalars and callables yield nothing.
    #[must_use]
    pub fn children(&self) -> Children<'_> {
        match self {
            Self::Sequence(elements) => Children(ChildrenInner::Sequence(elements.iter())),
            Self::Record(fields) => Children(ChildrenInner::Record(fields.values())),
            _ => Children(ChildrenInner::Leaf),
        }
    }
}

/// Iterator over a value's direct children, returned by [`Value::children`].
#[derive(Debug)]
pub struct Children<'a>(ChildrenInner<'a>);

#[derive(Debug)]
enum ChildrenInner<'a> {
    Leaf,
    Sequence(slice::Iter<'a, Value>),
    Record(indexmap::map::Values<'a, String, Value>),
}

impl<'a> Iterator for Children<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.0 {
            ChildrenInner::Leaf => None,
            ChildrenInner::Sequence(elements) => elements.next(),
            ChildrenInner::Record(fields) => fields.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.0 {
            ChildrenInner::Leaf => (0, Some(0)),
            ChildrenInner::Sequence(elements) => elements.size_hint(),
            ChildrenInner::Record(fields) => fields.size_hint(),
        }
    }
}

impl ExactSizeIterator for Children<'_> {}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Boolean(flag)
    }
}

impl From<Thunk> for Value {
    fn from(thunk: Thunk) -> Self {
        Self::Callable(thunk)
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Self::Sequence(elements)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(fields: IndexMap<String, Value>) -> Self {
        Self::Record(fields)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Number(number) => serializer.serialize_f64(*number),
            Self::Boolean(flag) => serializer.serialize_bool(*flag),
            Self::Callable(_) => Err(S::Error::custom(SearchError::unserialisable(
                ValueKind::Callable,
            ))),
            Self::Record(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (name, value) in fields {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
            Self::Sequence(elements) => {
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a boolean, number, string, sequence, or map")
    }

    fn visit_bool<E>(self, flag: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Boolean(flag))
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "numbers are uniformly f64; integers beyond 2^53 lose precision by contract"
    )]
    fn visit_i64<E>(self, number: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Number(number as f64))
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "numbers are uniformly f64; integers beyond 2^53 lose precision by contract"
    )]
    fn visit_u64<E>(self, number: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Number(number as f64))
    }

    fn visit_f64<E>(self, number: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Number(number))
    }

    fn visit_str<E>(self, text: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Text(text.to_owned()))
    }

    fn visit_string<E>(self, text: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Text(text))
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(element) = access.next_element()? {
            elements.push(element);
        }
        Ok(Value::Sequence(elements))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut fields = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, value)) = access.next_entry::<String, Value>()? {
            fields.insert(name, value);
        }
        Ok(Value::Record(fields))
    }
}

impl<'de> Deserialize<'de> for Value {
    /// Deserialises from any self-describing format.
    ///
    /// Integers and floats both become [`Value::Number`]; nulls are
    /// rejected because the value model has no null kind; callables cannot
    /// be deserialised.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}
