//! Destination structure building
//!
//! Writes resolved values into an owned destination tree, creating nested
//! containers on demand. Dotted destinations are collision-checked: a leaf
//! that already holds a value is only replaced when override is requested.
//! Token destinations are plain top-level assignments.
//!
//! Copyright (c) 2025 Pathmap Contributors
//! Licensed under the Apache-2.0 license

use super::table::{Destination, MappingTable};
use crate::value::{join_path, MapDisplay};
use crate::{Error, Key, KeyMode, Map, PushOptions, Result, Value};

/// Failure detected while walking the destination, before it is enriched
/// with a snapshot of the destination root
enum WriteFailure {
    Collision(Key),
    NotContainer(Key),
    MissingIntermediate(Key),
}

/// Write `value` into `dest` at `destination`
pub fn push(
    dest: &mut Map,
    destination: &Destination,
    value: Value,
    options: &PushOptions,
) -> Result<()> {
    if let Destination::Token(name) = destination {
        dest.insert(Key::Token(name.clone()), value);
        return Ok(());
    }

    let segments = destination.segments(options.keys);
    log::trace!("writing {} value at {}", value.type_name(), destination);

    write(dest, &segments, value, options).map_err(|failure| {
        let path = join_path(&segments);
        match failure {
            WriteFailure::Collision(key) => Error::AlreadyAssignedValue {
                key: key.to_string(),
                path,
                snapshot: MapDisplay(dest).to_string(),
            },
            WriteFailure::NotContainer(key) => Error::InvalidDestinationStructure {
                key: key.to_string(),
                path,
                message: "cannot descend into a non-container value".to_string(),
            },
            WriteFailure::MissingIntermediate(key) => Error::InvalidDestinationStructure {
                key: key.to_string(),
                path,
                message: "intermediate container does not exist".to_string(),
            },
        }
    })
}

fn write(
    root: &mut Map,
    segments: &[Key],
    value: Value,
    options: &PushOptions,
) -> std::result::Result<(), WriteFailure> {
    let Some((last, intermediate)) = segments.split_last() else {
        return Ok(());
    };

    let mut context = root;
    for segment in intermediate {
        let missing = context.get(segment).map_or(true, Value::is_null);
        if missing && !options.build_structure {
            return Err(WriteFailure::MissingIntermediate(segment.clone()));
        }

        let child = context
            .entry(segment.clone())
            .or_insert_with(|| Value::Map(Map::new()));
        if child.is_null() {
            *child = Value::Map(Map::new());
        }
        context = match child {
            Value::Map(map) => map,
            _ => return Err(WriteFailure::NotContainer(segment.clone())),
        };
    }

    if !options.override_existing && context.get(last).is_some_and(|existing| !existing.is_null()) {
        return Err(WriteFailure::Collision(last.clone()));
    }
    context.insert(last.clone(), value);
    Ok(())
}

/// Pre-build the nested containers implied by a table's dotted destinations
///
/// Only intermediate segments are created; leaves are left for the mapping
/// itself. Token and single-segment destinations contribute nothing.
pub fn skeleton(table: &MappingTable, keys: KeyMode) -> Map {
    let mut root = Map::new();
    for entry in table {
        if let Destination::Token(_) = entry.destination {
            continue;
        }
        let segments = entry.destination.segments(keys);
        let Some((_, intermediate)) = segments.split_last() else {
            continue;
        };

        let mut context = &mut root;
        for segment in intermediate {
            let child = context
                .entry(segment.clone())
                .or_insert_with(|| Value::Map(Map::new()));
            context = match child {
                Value::Map(map) => map,
                _ => break,
            };
        }
    }
    root
}

/// Drop entries holding empty values, recursing into nested containers
///
/// Emptiness is judged before a nested container is compacted, so a map
/// whose entries are all empty survives as an empty map.
pub fn compact(map: &Map) -> Map {
    map.iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| {
            let value = match value {
                Value::Map(inner) => Value::Map(compact(inner)),
                other => other.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}
