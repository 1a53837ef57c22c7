//! Source and destination data model
//!
//! [`Value`] is the closed set of node kinds the engine knows how to walk:
//! keyed containers, ordered sequences, accessor-bearing objects, absence and
//! scalar leaves. The resolver dispatches on [`NodeKind`] rather than probing
//! values for capabilities.
//!
//! Copyright (c) 2025 Pathmap Contributors
//! Licensed under the Apache-2.0 license

mod accessor;
mod convert;
mod display;

pub(crate) use display::MapDisplay;

pub use accessor::NamedAccessor;

use indexmap::IndexMap;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Keyed container. Insertion order is kept for rendering only; equality
/// ignores it.
pub type Map = IndexMap<Key, Value>;

/// A key in a keyed container, which doubles as a path segment
///
/// The same logical key can exist in two textual representations: a plain
/// string (`"name"`) and an atomic token (`:name`). Integer keys address
/// sequence positions, and may also key a container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Plain string key
    Str(String),
    /// Atomic token key
    Token(String),
    /// Non-negative integer key or sequence index
    Index(usize),
}

impl Key {
    pub fn str(name: impl Into<String>) -> Self {
        Key::Str(name.into())
    }

    pub fn token(name: impl Into<String>) -> Self {
        Key::Token(name.into())
    }

    pub fn index(index: usize) -> Self {
        Key::Index(index)
    }

    /// Textual name of the key, used for accessor lookups
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            Key::Str(s) | Key::Token(s) => Cow::Borrowed(s),
            Key::Index(i) => Cow::Owned(i.to_string()),
        }
    }

    /// The plain-string representation of this key
    pub fn to_string_form(&self) -> Key {
        Key::Str(self.name().into_owned())
    }

    /// The atomic-token representation of this key
    pub fn to_token_form(&self) -> Key {
        Key::Token(self.name().into_owned())
    }

    /// Interpret the key as a sequence index
    ///
    /// Integer keys are indices as-is; string and token keys qualify when they
    /// consist solely of ASCII digits. Digit runs too large for `usize` map
    /// to `usize::MAX`, which is out of bounds for every sequence.
    pub fn index_form(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Str(s) | Key::Token(s) => {
                if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                    Some(s.parse().unwrap_or(usize::MAX))
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Str(s) | Key::Token(s) => f.write_str(s),
            Key::Index(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Str(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Str(name)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

/// Render a segment list as a dotted path
pub(crate) fn join_path(segments: &[Key]) -> String {
    segments
        .iter()
        .map(|segment| segment.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Split a dotted path into its pieces
///
/// Trailing empty pieces are dropped, so `"roles."` is one piece and `""`
/// is none. Leading and inner empty pieces are kept.
pub(crate) fn split_path(path: &str) -> Vec<&str> {
    let trimmed = path.trim_end_matches('.');
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('.').collect()
}

/// Structural kind of a node, used for traversal dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Keyed container
    Keyed,
    /// Ordered, index-addressable sequence
    Sequence,
    /// Object exposing named read accessors
    Object,
    /// Absence of a value
    Absent,
    /// Scalar leaf (bool, number, string, token)
    Scalar,
}

/// A heterogeneous source or destination node
#[derive(Clone, Default)]
pub enum Value {
    /// Absence
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// Atomic token value
    Token(String),
    Sequence(Vec<Value>),
    Map(Map),
    /// Accessor-bearing object, shared by reference
    Object(Arc<dyn NamedAccessor>),
}

impl Value {
    /// Wrap a host object exposing named accessors
    pub fn object(object: impl NamedAccessor + 'static) -> Self {
        Value::Object(Arc::new(object))
    }

    pub fn token(name: impl Into<String>) -> Self {
        Value::Token(name.into())
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Value::Map(_) => NodeKind::Keyed,
            Value::Sequence(_) => NodeKind::Sequence,
            Value::Object(_) => NodeKind::Object,
            Value::Null => NodeKind::Absent,
            Value::Bool(_)
            | Value::Integer(_)
            | Value::Float(_)
            | Value::String(_)
            | Value::Token(_) => NodeKind::Scalar,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether the value counts as empty for compaction purposes
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) | Value::Token(s) => s.is_empty(),
            Value::Sequence(items) => items.is_empty(),
            Value::Map(map) => map.is_empty(),
            _ => false,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Token(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Look up a key in a keyed container
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(&key.into()))
    }

    /// Short name of the value's type, used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Token(_) => "token",
            Value::Sequence(_) => "sequence",
            Value::Map(_) => "map",
            Value::Object(_) => "object",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Token(a), Value::Token(b)) => a == b,
            (Value::Sequence(a), Value::Sequence(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Integer(n) => f.debug_tuple("Integer").field(n).finish(),
            Value::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Token(s) => f.debug_tuple("Token").field(s).finish(),
            Value::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            Value::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Value::Object(object) => f.debug_tuple("Object").field(object).finish(),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<Arc<dyn NamedAccessor>> for Value {
    fn from(object: Arc<dyn NamedAccessor>) -> Self {
        Value::Object(object)
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
