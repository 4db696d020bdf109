//! The value tree that all nestmap operations work over.
//!
//! [`Value`] is the runtime representation of arbitrarily nested data:
//! scalars, lists, plain mappings ([`Map`]) and attribute-accessible mappings
//! ([`DotMap`]). Mappings iterate in insertion order, which the flatten and
//! unflatten transforms rely on.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dot::DotMap;

/// An insertion-ordered mapping from string keys to values.
pub type Map = IndexMap<String, Value>;

/// A node in a nested value tree.
///
/// Deserialization never produces the `Dot` variant; objects come in as
/// `Map` and are upgraded explicitly via [`to_dot`](crate::to_dot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Map),
    Dot(DotMap),
}

impl Value {
    /// True for both mapping variants (`Map` and `Dot`).
    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Map(_) | Value::Dot(_))
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_dot(&self) -> Option<&DotMap> {
        match self {
            Value::Dot(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl From<DotMap> for Value {
    fn from(dot: DotMap) -> Self {
        Value::Dot(dot)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    // u64 beyond i64 range degrades to float
                    Value::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => {
                Value::Map(entries.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(n) => serde_json::Value::Number(n.into()),
            Value::Float(n) => serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
            Value::Dot(dot) => serde_json::Value::from(Value::Map(dot.into_map())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_numbers_split_into_int_and_float() {
        assert_eq!(Value::from(json!(42)), Value::Int(42));
        assert_eq!(Value::from(json!(2.5)), Value::Float(2.5));
    }

    #[test]
    fn json_object_becomes_map_in_order() {
        // Non-alphabetical keys, so this fails if conversion reorders them.
        let value = Value::from(json!({"z": 1, "b": {"c": true}, "a": 2}));
        let map = value.as_map().unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "b", "a"]);
        assert_eq!(map["b"].as_map().unwrap()["c"], Value::Bool(true));
    }

    #[test]
    fn json_literal_source_order_is_preserved() {
        let value = Value::from(json!({"z": 1, "m": 2, "a": 3}));
        let keys: Vec<&str> = value.as_map().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "m", "a"]);
    }

    #[test]
    fn value_round_trips_through_json() {
        let original = json!({"a": [1, "two", null], "b": {"c": 2.5}});
        let value = Value::from(original.clone());
        assert_eq!(serde_json::Value::from(value), original);
    }

    #[test]
    fn untagged_serde_round_trip() {
        let value = Value::from(json!({"x": [1, {"y": false}]}));
        let text = serde_json::to_string(&value).unwrap();
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn is_mapping_covers_both_variants() {
        assert!(Value::Map(Map::new()).is_mapping());
        assert!(Value::Dot(crate::DotMap::new()).is_mapping());
        assert!(!Value::List(vec![]).is_mapping());
        assert!(!Value::Int(1).is_mapping());
    }
}
