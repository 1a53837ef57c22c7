//! Named accessors supported on ordered sequences
//!
//! A non-numeric path segment reaching a sequence names one of these
//! accessors, e.g. `"roles.last"` or `"scores.sum"`.
//!
//! Copyright (c) 2025 Pathmap Contributors
//! Licensed under the Apache-2.0 license

use crate::Value;
use std::cmp::Ordering;
use std::str::FromStr;

/// Accessors available on sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceAccessor {
    First,
    Last,
    /// Element count; also reachable as `length` and `count`
    Size,
    /// Numeric sum; absent when any element is not a number
    Sum,
    Min,
    Max,
    Reverse,
    /// Drop absent elements
    Compact,
}

impl FromStr for SequenceAccessor {
    type Err = ();

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "first" => Ok(SequenceAccessor::First),
            "last" => Ok(SequenceAccessor::Last),
            "size" | "length" | "count" => Ok(SequenceAccessor::Size),
            "sum" => Ok(SequenceAccessor::Sum),
            "min" => Ok(SequenceAccessor::Min),
            "max" => Ok(SequenceAccessor::Max),
            "reverse" => Ok(SequenceAccessor::Reverse),
            "compact" => Ok(SequenceAccessor::Compact),
            _ => Err(()),
        }
    }
}

impl SequenceAccessor {
    /// Look up an accessor by name
    pub fn named(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// Apply the accessor to a sequence
    pub fn apply(self, items: &[Value]) -> Value {
        match self {
            SequenceAccessor::First => items.first().cloned().unwrap_or_default(),
            SequenceAccessor::Last => items.last().cloned().unwrap_or_default(),
            SequenceAccessor::Size => Value::Integer(items.len() as i64),
            SequenceAccessor::Sum => sum(items),
            SequenceAccessor::Min => extremum(items, Ordering::Less),
            SequenceAccessor::Max => extremum(items, Ordering::Greater),
            SequenceAccessor::Reverse => Value::Sequence(items.iter().rev().cloned().collect()),
            SequenceAccessor::Compact => {
                Value::Sequence(items.iter().filter(|v| !v.is_null()).cloned().collect())
            }
        }
    }
}

fn sum(items: &[Value]) -> Value {
    let mut int_total: Option<i64> = Some(0);
    let mut float_total = 0.0;
    let mut saw_float = false;

    for item in items {
        match item {
            Value::Integer(n) => {
                int_total = int_total.and_then(|total| total.checked_add(*n));
                float_total += *n as f64;
            }
            Value::Float(n) => {
                saw_float = true;
                float_total += n;
            }
            _ => return Value::Null,
        }
    }

    match int_total {
        Some(total) if !saw_float => Value::Integer(total),
        _ => Value::Float(float_total),
    }
}

/// Element that compares as `wanted` against every other, or absence when
/// the elements are not mutually comparable
fn extremum(items: &[Value], wanted: Ordering) -> Value {
    let mut best: Option<&Value> = None;
    for item in items {
        best = match best {
            None => Some(item),
            Some(current) => match compare(item, current) {
                Some(ordering) if ordering == wanted => Some(item),
                Some(_) => Some(current),
                None => return Value::Null,
            },
        };
    }
    best.cloned().unwrap_or_default()
}

fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => Some(x.cmp(y)),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Token(x), Value::Token(y)) => Some(x.cmp(y)),
        _ => a.as_f64()?.partial_cmp(&b.as_f64()?),
    }
}
