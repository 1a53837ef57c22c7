//! Conversions between [`Value`] and `serde_json`
//!
//! JSON documents convert losslessly into values with string keys. Values
//! serialize back through serde; tokens become plain strings and accessor
//! objects cannot be serialized.

use super::{Key, Map, Value};
use serde::ser::{Error as _, Serialize, Serializer};

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| (Key::Str(k), Value::from(v)))
                    .collect::<Map>(),
            ),
        }
    }
}

impl Value {
    /// Convert into a `serde_json::Value`
    ///
    /// Fails when the value contains an accessor object.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Key::Str(s) | Key::Token(s) => serializer.serialize_str(s),
            Key::Index(i) => serializer.collect_str(i),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::String(s) | Value::Token(s) => serializer.serialize_str(s),
            Value::Sequence(items) => items.serialize(serializer),
            Value::Map(map) => map.serialize(serializer),
            Value::Object(object) => Err(S::Error::custom(format!(
                "accessor object {:?} cannot be serialized",
                object
            ))),
        }
    }
}
