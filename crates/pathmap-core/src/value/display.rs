//! Human-readable rendering of values
//!
//! Used for destination snapshots in collision errors. Map keys keep their
//! representation visible: strings are quoted, tokens are prefixed with `:`.

use super::{Key, Map, Value};
use std::fmt;

/// Display adapter rendering a bare keyed container
pub(crate) struct MapDisplay<'a>(pub &'a Map);

impl fmt::Display for MapDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} => {}", KeyRepr(key), value)?;
        }
        f.write_str("}")
    }
}

struct KeyRepr<'a>(&'a Key);

impl fmt::Display for KeyRepr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Key::Str(s) => write!(f, "{:?}", s),
            Key::Token(s) => write!(f, ":{}", s),
            Key::Index(i) => write!(f, "{}", i),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{:?}", n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Token(s) => write!(f, ":{}", s),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Map(map) => write!(f, "{}", MapDisplay(map)),
            Value::Object(object) => write!(f, "#<{:?}>", object),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nested() {
        let mut inner = Map::new();
        inner.insert(Key::token("best"), Value::Float(1.5));
        let mut map = Map::new();
        map.insert(Key::str("name"), "Pawel".into());
        map.insert(Key::token("scores"), vec![1, 2].into());
        map.insert(Key::index(0), Value::Map(inner));
        map.insert(Key::token("gone"), Value::Null);

        assert_eq!(
            Value::Map(map).to_string(),
            r#"{"name" => "Pawel", :scores => [1, 2], 0 => {:best => 1.5}, :gone => null}"#
        );
    }

    #[test]
    fn test_display_token_value() {
        assert_eq!(Value::token("ok").to_string(), ":ok");
    }
}
