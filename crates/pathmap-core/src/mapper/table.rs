//! Mapping tables: ordered source → destination declarations
//!
//! Copyright (c) 2025 Pathmap Contributors
//! Licensed under the Apache-2.0 license

use super::key_spec::KeySpec;
use crate::value::split_path;
use crate::{Error, Key, KeyMode, Result, Value};
use std::fmt;

/// Destination side of a mapping-table entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Single top-level token key, written verbatim without collision checks
    Token(String),
    /// Dotted path, split into segments typed by the active [`KeyMode`]
    Path(String),
}

impl Destination {
    pub fn token(name: impl Into<String>) -> Self {
        Destination::Token(name.into())
    }

    pub fn path(path: impl Into<String>) -> Self {
        Destination::Path(path.into())
    }

    /// Segments of a dotted destination, typed per `keys`
    ///
    /// Token destinations are a single token segment regardless of mode.
    /// Trailing empty pieces of a dotted path are dropped, so an empty path
    /// has no segments and writing to it does nothing.
    pub fn segments(&self, keys: KeyMode) -> Vec<Key> {
        match self {
            Destination::Token(name) => vec![Key::Token(name.clone())],
            Destination::Path(path) => split_path(path)
                .into_iter()
                .map(|segment| keys.key(segment))
                .collect(),
        }
    }
}

impl From<&str> for Destination {
    fn from(path: &str) -> Self {
        Destination::Path(path.to_string())
    }
}

impl From<String> for Destination {
    fn from(path: String) -> Self {
        Destination::Path(path)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Token(name) => write!(f, ":{}", name),
            Destination::Path(path) => f.write_str(path),
        }
    }
}

/// One `(key, destination)` declaration
#[derive(Debug, Clone)]
pub struct MappingEntry {
    pub key: KeySpec,
    pub destination: Destination,
}

/// Ordered mapping declarations; order is write order
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, builder style
    pub fn map(mut self, key: impl Into<KeySpec>, destination: impl Into<Destination>) -> Self {
        self.insert(key, destination);
        self
    }

    /// Append a computed-extractor entry, builder style
    pub fn computed<F>(self, f: F, destination: impl Into<Destination>) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.map(KeySpec::computed(f), destination)
    }

    /// Append an entry
    pub fn insert(&mut self, key: impl Into<KeySpec>, destination: impl Into<Destination>) {
        self.entries.push(MappingEntry {
            key: key.into(),
            destination: destination.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MappingEntry> {
        self.entries.iter()
    }

    /// Build a table from a keyed container of declarations
    ///
    /// String keys are dotted source paths and token keys single segments;
    /// string values are dotted destinations and token values token
    /// destinations. Declaration order follows the container's order.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Some(declarations) = value.as_map() else {
            return Err(Error::InvalidKeySpec {
                message: format!("Mapping table must be a map, got {}", value.type_name()),
            });
        };

        let mut table = Self::new();
        for (key, destination) in declarations {
            let key = match key {
                Key::Str(path) => KeySpec::Path(path.clone()),
                Key::Token(name) => KeySpec::Token(name.clone()),
                Key::Index(index) => {
                    return Err(Error::InvalidKeySpec {
                        message: format!("Invalid key type: integer ({})", index),
                    })
                }
            };
            let destination = match destination {
                Value::String(path) => Destination::Path(path.clone()),
                Value::Token(name) => Destination::Token(name.clone()),
                other => {
                    return Err(Error::InvalidDestinationStructure {
                        key: key_label(&key),
                        path: String::new(),
                        message: format!(
                            "destination must be a string or token, got {}",
                            other.type_name()
                        ),
                    })
                }
            };
            table.insert(key, destination);
        }
        Ok(table)
    }
}

fn key_label(key: &KeySpec) -> String {
    match key {
        KeySpec::Path(path) => path.clone(),
        KeySpec::Token(name) => format!(":{}", name),
        KeySpec::Segments(segments) => crate::value::join_path(segments),
        KeySpec::Computed(_) => "<computed>".to_string(),
    }
}

impl<'a> IntoIterator for &'a MappingTable {
    type Item = &'a MappingEntry;
    type IntoIter = std::slice::Iter<'a, MappingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<KeySpec>, D: Into<Destination>> FromIterator<(K, D)> for MappingTable {
    fn from_iter<I: IntoIterator<Item = (K, D)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, destination) in iter {
            table.insert(key, destination);
        }
        table
    }
}
