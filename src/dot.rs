//! # Attribute-Accessible Mapping
//!
//! [`DotMap`] is a mapping whose keys double as named fields. Rust has no
//! dynamic attribute interception, so both access forms are one API surface
//! over a single backing store: `m.get("foo")`, `m["foo"]` and iteration all
//! read the same `Map`, and every write funnels through [`DotMap::insert`].
//!
//! ## Reserved keys
//!
//! Because keys share a namespace with the mapping interface itself, names
//! that belong to that interface (`keys`, `items`, `get`, `update`, ...) are
//! rejected at write time with [`ReservedKeyError`]. The denylist is a fixed,
//! enumerable set — see [`RESERVED_KEYS`].
//!
//! ## Conversion
//!
//! [`to_dot`] rebuilds an arbitrary [`Value`] tree with every plain mapping
//! upgraded to a `DotMap`, recursing through lists and leaving leaves (and
//! existing `DotMap`s) untouched.

use std::collections::HashSet;
use std::ops::Index;

use once_cell::sync::Lazy;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ReservedKeyError, Result};
use crate::value::{Map, Value};

/// Names reserved by the mapping interface.
///
/// A key equal to any of these would shadow a mapping-protocol member, so
/// writes of these keys fail with [`ReservedKeyError`].
pub const RESERVED_KEYS: &[&str] = &[
    "clear",
    "contains_key",
    "copy",
    "get",
    "insert",
    "is_empty",
    "items",
    "iter",
    "keys",
    "len",
    "pop",
    "popitem",
    "remove",
    "setdefault",
    "update",
    "values",
];

static RESERVED_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| RESERVED_KEYS.iter().copied().collect());

/// Returns true if `key` collides with a reserved mapping-interface name.
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_SET.contains(key)
}

/// A mapping whose keys are also accessible as named fields.
///
/// Backed by a single insertion-ordered store: key access and field-style
/// access are the same operation, so they can never disagree.
///
/// # Example
/// ```
/// use nestmap::{DotMap, Value};
///
/// let mut m = DotMap::new();
/// m.insert("answer", 42).unwrap();
/// assert_eq!(m["answer"], Value::Int(42));
/// assert_eq!(m.get("answer"), Some(&Value::Int(42)));
///
/// // Reserved names are rejected.
/// assert!(m.insert("items", 1).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DotMap {
    entries: Map,
}

impl DotMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        DotMap { entries: Map::new() }
    }

    /// Builds a map from an existing plain mapping, validating every key.
    pub fn from_map(source: Map) -> Result<Self> {
        let mut dot = DotMap::new();
        dot.update(source)?;
        Ok(dot)
    }

    /// Builds from entries already known to pass the reserved-key check.
    pub(crate) fn from_validated(entries: Map) -> Self {
        debug_assert!(entries.keys().all(|k| !is_reserved_key(k)));
        DotMap { entries }
    }

    /// Inserts all entries from `other`, later entries winning on collision.
    ///
    /// Building from a source mapping plus explicit pairs, with the pairs
    /// taking precedence, is two `update` calls in that order.
    pub fn update<I>(&mut self, other: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        for (key, value) in other {
            self.insert(key, value)?;
        }
        Ok(())
    }

    /// Sets `key` to `value`, returning the previous value if any.
    ///
    /// This is the single write path shared by every mutation on the map.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Option<Value>> {
        let key = key.into();
        if is_reserved_key(&key) {
            return Err(ReservedKeyError::new(key));
        }
        Ok(self.entries.insert(key, value.into()))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Removes `key`, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.entries.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrows the backing store.
    pub fn as_map(&self) -> &Map {
        &self.entries
    }

    /// Consumes the map, returning the backing store.
    pub fn into_map(self) -> Map {
        self.entries
    }
}

impl Index<&str> for DotMap {
    type Output = Value;

    /// # Panics
    /// Panics if the key is absent; use [`DotMap::get`] for fallible access.
    fn index(&self, key: &str) -> &Value {
        self.entries
            .get(key)
            .unwrap_or_else(|| panic!("no entry for key '{key}'"))
    }
}

impl<'a> IntoIterator for &'a DotMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for DotMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for DotMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DotMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let entries = Map::deserialize(deserializer)?;
        DotMap::from_map(entries).map_err(D::Error::custom)
    }
}

/// Recursively rebuilds `value` with every plain mapping upgraded to a
/// [`DotMap`].
///
/// Lists are rebuilt element-wise; leaves and existing `DotMap`s pass through
/// unchanged. Fails only if the data contains a reserved key.
///
/// # Example
/// ```
/// use nestmap::{to_dot, Value};
///
/// let nested = Value::from(serde_json::json!({"data": {"child": 1}}));
/// let dotted = to_dot(nested).unwrap();
/// let data = dotted.as_dot().unwrap()["data"].as_dot().unwrap();
/// assert_eq!(data["child"], Value::Int(1));
/// ```
pub fn to_dot(value: Value) -> Result<Value> {
    match value {
        Value::Map(map) => {
            let mut dot = DotMap::new();
            for (key, nested) in map {
                dot.insert(key, to_dot(nested)?)?;
            }
            Ok(Value::Dot(dot))
        }
        Value::List(items) => {
            let converted: Result<Vec<Value>> = items.into_iter().map(to_dot).collect();
            Ok(Value::List(converted?))
        }
        other => Ok(other),
    }
}
