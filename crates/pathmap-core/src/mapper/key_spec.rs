//! Mapping-table key declarations and their decomposition into path segments
//!
//! Copyright (c) 2025 Pathmap Contributors
//! Licensed under the Apache-2.0 license

use crate::value::split_path;
use crate::{Error, Key, Result, Value};
use std::fmt;
use std::sync::Arc;

type ExtractorFn = dyn Fn(&Value) -> anyhow::Result<Value> + Send + Sync;

/// A computed extractor: a function invoked directly on the source root
///
/// Computed extractors bypass path resolution entirely, so neither strict
/// mode nor key-kind tolerance applies to them.
#[derive(Clone)]
pub struct Extractor(Arc<ExtractorFn>);

impl Extractor {
    /// Wrap an infallible extractor
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(move |source: &Value| Ok::<_, anyhow::Error>(f(source))))
    }

    /// Wrap an extractor that may fail with a host error
    pub fn try_new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the extractor against the source root
    pub fn call(&self, source: &Value) -> Result<Value> {
        (self.0)(source).map_err(Error::from)
    }
}

impl fmt::Debug for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Extractor(..)")
    }
}

/// Source side of a mapping-table entry
#[derive(Debug, Clone)]
pub enum KeySpec {
    /// Dotted path, e.g. `"source.google.search_word"`
    Path(String),
    /// Single atomic token segment, never split
    Token(String),
    /// Explicit, possibly pre-typed segment list used verbatim
    Segments(Vec<Key>),
    /// Function of the source root
    Computed(Extractor),
}

impl KeySpec {
    pub fn path(path: impl Into<String>) -> Self {
        KeySpec::Path(path.into())
    }

    pub fn token(name: impl Into<String>) -> Self {
        KeySpec::Token(name.into())
    }

    pub fn segments(segments: impl IntoIterator<Item = Key>) -> Self {
        KeySpec::Segments(segments.into_iter().collect())
    }

    /// Computed key from an infallible function of the source root
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        KeySpec::Computed(Extractor::new(f))
    }

    /// Computed key from a fallible function of the source root
    pub fn try_computed<F>(f: F) -> Self
    where
        F: Fn(&Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        KeySpec::Computed(Extractor::try_new(f))
    }

    /// Build a key spec from a dynamically supplied declaration
    ///
    /// Strings become dotted paths, tokens single segments, and sequences of
    /// strings, tokens or non-negative integers explicit segment lists.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(path) => Ok(KeySpec::Path(path.clone())),
            Value::Token(name) => Ok(KeySpec::Token(name.clone())),
            Value::Sequence(items) => items
                .iter()
                .map(segment_from_value)
                .collect::<Result<Vec<_>>>()
                .map(KeySpec::Segments),
            other => Err(Error::InvalidKeySpec {
                message: format!("Invalid key type: {}", other.type_name()),
            }),
        }
    }
}

fn segment_from_value(value: &Value) -> Result<Key> {
    match value {
        Value::String(s) => Ok(Key::Str(s.clone())),
        Value::Token(s) => Ok(Key::Token(s.clone())),
        Value::Integer(n) => {
            usize::try_from(*n)
                .map(Key::Index)
                .map_err(|_| Error::InvalidKeySpec {
                    message: format!("Invalid path segment index: {}", n),
                })
        }
        other => Err(Error::InvalidKeySpec {
            message: format!("Invalid path segment type: {} ({})", other.type_name(), other),
        }),
    }
}

impl From<&str> for KeySpec {
    fn from(path: &str) -> Self {
        KeySpec::Path(path.to_string())
    }
}

impl From<String> for KeySpec {
    fn from(path: String) -> Self {
        KeySpec::Path(path)
    }
}

impl From<Vec<Key>> for KeySpec {
    fn from(segments: Vec<Key>) -> Self {
        KeySpec::Segments(segments)
    }
}

impl From<Extractor> for KeySpec {
    fn from(extractor: Extractor) -> Self {
        KeySpec::Computed(extractor)
    }
}

/// Result of decomposing a [`KeySpec`]
#[derive(Debug)]
pub enum ParsedKey<'a> {
    /// Ordered path segments, resolved left to right
    Path(Vec<Key>),
    /// Opaque extractor, invoked on the source root
    Computed(&'a Extractor),
}

/// Decompose a key declaration into path segments
pub fn decompose(spec: &KeySpec) -> Result<ParsedKey<'_>> {
    let segments = match spec {
        KeySpec::Computed(extractor) => return Ok(ParsedKey::Computed(extractor)),
        KeySpec::Path(path) => {
            let pieces = split_path(path);
            if pieces.is_empty() {
                return Err(Error::InvalidKeySpec {
                    message: format!("Empty key path {:?}", path),
                });
            }
            pieces.into_iter().map(Key::str).collect()
        }
        KeySpec::Token(name) => vec![Key::Token(name.clone())],
        KeySpec::Segments(segments) => segments.clone(),
    };

    if segments.is_empty() {
        return Err(Error::InvalidKeySpec {
            message: "Empty segment list".to_string(),
        });
    }
    Ok(ParsedKey::Path(segments))
}
