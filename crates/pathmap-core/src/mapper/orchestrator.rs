//! Mapping orchestration
//!
//! Drives key decomposition, source resolution and destination writes for
//! every entry of a mapping table, in declaration order.
//!
//! Copyright (c) 2025 Pathmap Contributors
//! Licensed under the Apache-2.0 license

use super::builder;
use super::key_spec::{decompose, ParsedKey};
use super::resolver::resolve;
use super::table::{Destination, MappingTable};
use crate::{Map, MappingOptions, PushOptions, Result, Value};

/// Map `source` through `table` into a freshly built destination
///
/// The source is only ever read. Computed extractors receive the source root
/// directly and are not subject to `strict` or `any_key_kind`. The first
/// failure aborts the call; no partial destination is returned.
pub fn mapping(source: &Value, table: &MappingTable, options: &MappingOptions) -> Result<Map> {
    log::debug!(
        "mapping {} entries (strict: {}, any_key_kind: {}, keys: {})",
        table.len(),
        options.strict,
        options.any_key_kind,
        options.keys
    );

    let push_options = options.push_options();
    let mut destination = Map::new();

    for entry in table {
        let value = match decompose(&entry.key)? {
            ParsedKey::Computed(extractor) => extractor.call(source)?,
            ParsedKey::Path(segments) => {
                resolve(source, &segments, &segments, options)?.into_owned()
            }
        };
        log::debug!("mapped {:?} -> {}", entry.key, entry.destination);
        builder::push(&mut destination, &entry.destination, value, &push_options)?;
    }

    Ok(destination)
}

/// Method sugar for mapping from and writing into host structures
pub trait MapExt {
    /// Map `self` through `table`
    fn mapping(&self, table: &MappingTable, options: &MappingOptions) -> Result<Map>;

    /// Write `value` at `destination`, returning `self` for chaining
    fn push(
        &mut self,
        destination: impl Into<Destination>,
        value: impl Into<Value>,
        options: &PushOptions,
    ) -> Result<&mut Self>;
}

impl MapExt for Map {
    /// Maps a deep copy of the container, so extractors see a `Value` root
    ///
    /// The copy costs one clone of every nested map and sequence; accessor
    /// objects are shared. Wrap the container in a [`Value`] once and call
    /// [`mapping`](crate::mapping) directly to map it repeatedly without copying.
    fn mapping(&self, table: &MappingTable, options: &MappingOptions) -> Result<Map> {
        let source = Value::Map(self.clone());
        mapping(&source, table, options)
    }

    fn push(
        &mut self,
        destination: impl Into<Destination>,
        value: impl Into<Value>,
        options: &PushOptions,
    ) -> Result<&mut Self> {
        builder::push(self, &destination.into(), value.into(), options)?;
        Ok(self)
    }
}

impl MapExt for Value {
    fn mapping(&self, table: &MappingTable, options: &MappingOptions) -> Result<Map> {
        mapping(self, table, options)
    }

    /// Writes into a keyed container; an absent value becomes an empty one
    /// first. Other kinds fail with `InvalidDestinationStructure`.
    fn push(
        &mut self,
        destination: impl Into<Destination>,
        value: impl Into<Value>,
        options: &PushOptions,
    ) -> Result<&mut Self> {
        let destination = destination.into();
        if self.is_null() {
            *self = Value::Map(Map::new());
        }
        match self {
            Value::Map(map) => builder::push(map, &destination, value.into(), options)?,
            other => {
                return Err(crate::Error::InvalidDestinationStructure {
                    key: destination.to_string(),
                    path: destination.to_string(),
                    message: format!("cannot write into a {} value", other.type_name()),
                })
            }
        }
        Ok(self)
    }
}
