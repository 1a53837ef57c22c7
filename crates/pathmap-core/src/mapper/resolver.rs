//! Source path resolution
//!
//! Walks a source value segment by segment, dispatching on the structural
//! kind of the current node. Resolution borrows from the source wherever it
//! can; values produced by accessors are owned.
//!
//! Absence reached mid-path resolves to absence for every remaining segment,
//! strict mode included.
//!
//! Copyright (c) 2025 Pathmap Contributors
//! Licensed under the Apache-2.0 license

use super::sequence::SequenceAccessor;
use crate::{Error, Key, Map, MappingOptions, NamedAccessor, Result, Value};
use std::borrow::Cow;

/// Resolve `segments` against `node`, left to right
///
/// `full_path` is the complete declared path, used only for error messages.
pub fn resolve<'a>(
    node: &'a Value,
    segments: &[Key],
    full_path: &[Key],
    options: &MappingOptions,
) -> Result<Cow<'a, Value>> {
    let Some((current, rest)) = segments.split_first() else {
        return Ok(Cow::Borrowed(node));
    };

    log::trace!("resolving segment '{}' against {:?} node", current, node.kind());

    match step(node, current, full_path, options)? {
        Cow::Borrowed(next) => resolve(next, rest, full_path, options),
        Cow::Owned(next) => {
            let resolved = resolve(&next, rest, full_path, options)?.into_owned();
            Ok(Cow::Owned(resolved))
        }
    }
}

fn step<'a>(
    node: &'a Value,
    segment: &Key,
    full_path: &[Key],
    options: &MappingOptions,
) -> Result<Cow<'a, Value>> {
    match node {
        Value::Map(map) => resolve_keyed(map, segment, full_path, options),
        Value::Sequence(items) => resolve_sequence(items, segment, full_path, options),
        Value::Object(object) => resolve_object(object.as_ref(), segment, full_path, options),
        Value::Null => Ok(Cow::Owned(Value::Null)),
        scalar => {
            if options.strict {
                return Err(Error::key_missing(
                    segment,
                    full_path,
                    Some(format!("{} values expose no accessors", scalar.type_name())),
                ));
            }
            Ok(Cow::Owned(Value::Null))
        }
    }
}

/// Key representations probed against a keyed container, in precedence order
fn candidates(segment: &Key, any_key_kind: bool) -> Vec<Key> {
    if any_key_kind {
        vec![segment.clone(), segment.to_string_form(), segment.to_token_form()]
    } else {
        vec![segment.clone()]
    }
}

fn resolve_keyed<'a>(
    map: &'a Map,
    segment: &Key,
    full_path: &[Key],
    options: &MappingOptions,
) -> Result<Cow<'a, Value>> {
    let keys = candidates(segment, options.any_key_kind);

    if options.strict && !keys.iter().any(|key| map.contains_key(key)) {
        return Err(Error::key_missing(segment, full_path, None));
    }

    Ok(keys
        .iter()
        .filter_map(|key| map.get(key))
        .find(|value| !value.is_null())
        .map_or(Cow::Owned(Value::Null), Cow::Borrowed))
}

fn resolve_sequence<'a>(
    items: &'a [Value],
    segment: &Key,
    full_path: &[Key],
    options: &MappingOptions,
) -> Result<Cow<'a, Value>> {
    if let Some(index) = segment.index_form() {
        return match items.get(index) {
            Some(item) => Ok(Cow::Borrowed(item)),
            None if options.strict => Err(Error::key_missing(
                segment,
                full_path,
                Some(format!("index out of bounds for sequence of length {}", items.len())),
            )),
            None => Ok(Cow::Owned(Value::Null)),
        };
    }

    let name = segment.name();
    match SequenceAccessor::named(&name) {
        Some(accessor) => Ok(Cow::Owned(accessor.apply(items))),
        None if options.strict => Err(Error::key_missing(
            segment,
            full_path,
            Some(format!("sequences do not support {}", name)),
        )),
        None => {
            log::warn!("sequences do not support '{}', resolving to absence", name);
            Ok(Cow::Owned(Value::Null))
        }
    }
}

fn resolve_object<'a>(
    object: &dyn NamedAccessor,
    segment: &Key,
    full_path: &[Key],
    options: &MappingOptions,
) -> Result<Cow<'a, Value>> {
    let name = segment.name();
    if object.has_accessor(&name) {
        return Ok(Cow::Owned(object.get_accessor(&name).unwrap_or_default()));
    }
    if options.strict {
        return Err(Error::key_missing(segment, full_path, None));
    }
    Ok(Cow::Owned(Value::Null))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use serde_json::json;

    fn path(dotted: &str) -> Vec<Key> {
        dotted.split('.').map(Key::str).collect()
    }

    fn lenient() -> MappingOptions {
        MappingOptions::default()
    }

    fn strict() -> MappingOptions {
        MappingOptions::default().strict(true)
    }

    fn get(source: &Value, dotted: &str, options: &MappingOptions) -> Result<Value> {
        let segments = path(dotted);
        resolve(source, &segments, &segments, options).map(Cow::into_owned)
    }

    #[derive(Debug)]
    struct Account {
        owner: String,
    }

    impl NamedAccessor for Account {
        fn has_accessor(&self, name: &str) -> bool {
            matches!(name, "owner" | "profile" | "nothing")
        }

        fn get_accessor(&self, name: &str) -> Option<Value> {
            match name {
                "owner" => Some(self.owner.clone().into()),
                "profile" => Some(Value::from(json!({"tier": "gold"}))),
                _ => None,
            }
        }
    }

    #[test]
    fn test_empty_path_returns_node() {
        let source = Value::from(json!({"a": 1}));
        let resolved = resolve(&source, &[], &[], &lenient()).unwrap();
        assert!(matches!(resolved, Cow::Borrowed(_)));
        assert_eq!(resolved.into_owned(), source);
    }

    #[test]
    fn test_nested_keyed_containers() {
        let source = Value::from(json!({"source": {"google": {"search_word": "ruby"}}}));
        assert_eq!(
            get(&source, "source.google.search_word", &lenient()).unwrap(),
            Value::from("ruby")
        );
    }

    #[test]
    fn test_missing_key_lenient_and_strict() {
        let source = Value::from(json!({"source": {"google": {}}}));
        assert_eq!(get(&source, "source.google.missing_key", &lenient()).unwrap(), Value::Null);

        let err = get(&source, "source.google.missing_key", &strict()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyMissing);
        assert_eq!(
            err.to_string(),
            "missing_key key not found; full path source.google.missing_key"
        );
    }

    #[test]
    fn test_present_null_key_is_absence_even_when_strict() {
        let source = Value::from(json!({"a": null}));
        assert_eq!(get(&source, "a", &strict()).unwrap(), Value::Null);
    }

    #[test]
    fn test_absence_mid_path_short_circuits_under_strict() {
        let source = Value::from(json!({"a": null}));
        assert_eq!(get(&source, "a.b.c", &strict()).unwrap(), Value::Null);
    }

    #[test]
    fn test_any_key_kind_candidates() {
        let mut map = Map::new();
        map.insert(Key::token("c"), 10.into());
        map.insert(Key::str("b"), 1.into());
        let source = Value::Map(map);
        let options = lenient().any_key_kind(true);

        let token_path = [Key::token("b")];
        assert_eq!(
            resolve(&source, &token_path, &token_path, &options).unwrap().into_owned(),
            Value::from(1)
        );
        assert_eq!(get(&source, "c", &options).unwrap(), Value::from(10));

        // without tolerance the representations do not match
        assert_eq!(get(&source, "c", &lenient()).unwrap(), Value::Null);
    }

    #[test]
    fn test_any_key_kind_precedence_skips_null() {
        let mut map = Map::new();
        map.insert(Key::str("k"), Value::Null);
        map.insert(Key::token("k"), "token".into());
        let source = Value::Map(map);

        let options = lenient().any_key_kind(true);
        assert_eq!(get(&source, "k", &options).unwrap(), Value::from("token"));
    }

    #[test]
    fn test_any_key_kind_strict_missing() {
        let source = Value::from(json!({"A": "test"}));
        let options = strict().any_key_kind(true);
        let segments = [Key::token("k")];
        let err = resolve(&source, &segments, &segments, &options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyMissing);
    }

    #[test]
    fn test_sequence_indexing() {
        let source = Value::from(json!({"array": [[1, 2, 3], [4, 5, 6], [7, 8, [":D"]]]}));
        assert_eq!(get(&source, "array.2.2.first", &lenient()).unwrap(), Value::from(":D"));
        assert_eq!(get(&source, "array.1.0", &lenient()).unwrap(), Value::from(4));
        assert_eq!(get(&source, "array.9", &lenient()).unwrap(), Value::Null);
    }

    #[test]
    fn test_sequence_index_out_of_bounds_strict() {
        let source = Value::from(json!({"payments": [1, 2, 3, 4]}));
        let err = get(&source, "payments.4", &strict()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyMissing);
        assert!(err.to_string().contains("full path payments.4"));
    }

    #[test]
    fn test_sequence_accessors() {
        let source = Value::from(json!({"scores": [10, 2, 5, 1000], "roles": ["admin", "user"]}));
        assert_eq!(get(&source, "scores.sum", &lenient()).unwrap(), Value::from(1017));
        assert_eq!(get(&source, "scores.max", &lenient()).unwrap(), Value::from(1000));
        assert_eq!(get(&source, "roles.last", &lenient()).unwrap(), Value::from("user"));
        assert_eq!(get(&source, "roles.size", &lenient()).unwrap(), Value::from(2));
    }

    #[test]
    fn test_unknown_sequence_accessor() {
        let source = Value::from(json!({"scores": [1, 2]}));
        assert_eq!(get(&source, "scores.median", &lenient()).unwrap(), Value::Null);

        let err = get(&source, "scores.median", &strict()).unwrap_err();
        assert!(err.to_string().contains("sequences do not support median"));
    }

    #[test]
    fn test_typed_index_segment() {
        let source = Value::from(json!({"roles": ["admin", "manager", "user"]}));
        let segments = [Key::str("roles"), Key::index(1)];
        assert_eq!(
            resolve(&source, &segments, &segments, &lenient()).unwrap().into_owned(),
            Value::from("manager")
        );
    }

    #[test]
    fn test_object_accessors() {
        let mut map = Map::new();
        map.insert(Key::str("account"), Value::object(Account { owner: "pawel".into() }));
        let source = Value::Map(map);

        assert_eq!(get(&source, "account.owner", &lenient()).unwrap(), Value::from("pawel"));
        assert_eq!(get(&source, "account.profile.tier", &lenient()).unwrap(), Value::from("gold"));
        assert_eq!(get(&source, "account.nothing", &strict()).unwrap(), Value::Null);
        assert_eq!(get(&source, "account.balance", &lenient()).unwrap(), Value::Null);

        let err = get(&source, "account.balance", &strict()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyMissing);
    }

    #[test]
    fn test_scalar_has_no_accessors() {
        let source = Value::from(json!({"name": "ruby"}));
        assert_eq!(get(&source, "name.size", &lenient()).unwrap(), Value::Null);

        let err = get(&source, "name.size", &strict()).unwrap_err();
        assert!(err.to_string().contains("string values expose no accessors"));
    }
}
