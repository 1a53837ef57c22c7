//! Property-based testing strategies for generating test data
//!
//! This module provides proptest strategies for generating random
//! but well-formed values, keys and identity mapping tables.

#![cfg(test)]

use crate::{Key, Map, Value};
use proptest::collection::vec;
use proptest::prelude::*;

/// Strategy for generating field names that never contain the path separator
pub fn field_name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,12}"
}

/// Strategy for generating keys of either textual representation
pub fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        field_name_strategy().prop_map(Key::Str),
        field_name_strategy().prop_map(Key::Token),
    ]
}

/// Strategy for generating non-absent scalar leaves
pub fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String),
        field_name_strategy().prop_map(Value::Token),
    ]
}

/// Strategy for generating nested values with controlled depth
pub fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![Just(Value::Null), scalar_strategy()];

    leaf.prop_recursive(
        3,  // max depth
        24, // max size
        5,  // items per collection
        |inner| {
            prop_oneof![
                vec(inner.clone(), 0..5).prop_map(Value::Sequence),
                vec((key_strategy(), inner), 0..5)
                    .prop_map(|entries| Value::Map(entries.into_iter().collect::<Map>())),
            ]
        },
    )
}

/// Strategy for generating flat records with string keys and scalar values
pub fn flat_record_strategy() -> impl Strategy<Value = Map> {
    vec((field_name_strategy(), scalar_strategy()), 0..8).prop_map(|fields| {
        fields
            .into_iter()
            .map(|(name, value)| (Key::Str(name), value))
            .collect()
    })
}
