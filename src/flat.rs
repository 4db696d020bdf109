//! # Flatten / Unflatten
//!
//! A lossless, reversible transform between a nested mapping and a flat
//! mapping keyed by [`PathKey`]s — the ordered chain of original keys leading
//! to each leaf.
//!
//! Path keys are a distinct type, not a naming convention: [`FlatKey`] tags
//! every flat-map key as either a full [`PathKey`] or an ordinary key, so a
//! flattened mapping is unambiguous no matter what the source keys look like.
//!
//! ## Round trip
//!
//! For any nested mapping with no empty nested mappings,
//! `unflatten(&flatten(&m))` is structurally equal to `m`. Empty nested maps
//! contribute no leaves and are therefore dropped by `flatten` — a documented
//! edge case, not an error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::{Map, Value};

/// The chain of keys from the root of a nested mapping to one leaf.
///
/// Ordered and immutable once built; two path keys are equal iff their
/// segments are equal element-wise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathKey(Vec<String>);

impl PathKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PathKey(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns this path extended by one more segment.
    fn child(&self, segment: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.to_string());
        PathKey(segments)
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl From<Vec<String>> for PathKey {
    fn from(segments: Vec<String>) -> Self {
        PathKey(segments)
    }
}

/// A key in a flattened mapping: either a full path or an ordinary key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlatKey {
    /// A chain of keys produced by [`flatten`].
    Path(PathKey),
    /// A plain key that was never part of a nested traversal.
    Key(String),
}

impl FlatKey {
    /// Convenience constructor for a path key.
    pub fn path<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FlatKey::Path(PathKey::new(segments))
    }
}

impl From<PathKey> for FlatKey {
    fn from(path: PathKey) -> Self {
        FlatKey::Path(path)
    }
}

impl From<&str> for FlatKey {
    fn from(key: &str) -> Self {
        FlatKey::Key(key.to_string())
    }
}

impl From<String> for FlatKey {
    fn from(key: String) -> Self {
        FlatKey::Key(key)
    }
}

/// A flattened mapping: path-keyed leaves in depth-first source order.
pub type FlatMap = indexmap::IndexMap<FlatKey, Value>;

/// Flattens a nested mapping into path-keyed leaves.
///
/// Walks `nested` depth-first in iteration order, descending into every
/// plain-mapping value and emitting one entry per leaf, keyed by the full
/// chain of keys from the root. A leaf is any value that is not a plain
/// mapping ([`DotMap`](crate::DotMap) values count as leaves). An empty
/// nested mapping contributes no entries.
///
/// # Example
/// ```
/// use nestmap::{flatten, FlatKey, Value};
///
/// let nested = Value::from(serde_json::json!({"a": {"b": 1}, "e": 3}));
/// let flat = flatten(nested.as_map().unwrap());
///
/// assert_eq!(flat[&FlatKey::path(["a", "b"])], Value::Int(1));
/// assert_eq!(flat[&FlatKey::path(["e"])], Value::Int(3));
/// ```
pub fn flatten(nested: &Map) -> FlatMap {
    let mut flat = FlatMap::new();
    flatten_into(nested, &PathKey(Vec::new()), &mut flat);
    flat
}

fn flatten_into(map: &Map, parent: &PathKey, out: &mut FlatMap) {
    for (key, value) in map {
        let path = parent.child(key);
        match value {
            Value::Map(nested) => flatten_into(nested, &path, out),
            leaf => {
                out.insert(FlatKey::Path(path), leaf.clone());
            }
        }
    }
}

/// Rebuilds a nested mapping from a flattened one.
///
/// Entries are processed in iteration order. A [`FlatKey::Path`] entry walks
/// the tree along all but its last segment, creating empty maps at missing
/// levels, then sets the leaf at the final segment. A [`FlatKey::Key`] entry
/// is set directly at the top level. A non-mapping value already sitting at
/// an intermediate segment is replaced by a fresh empty map, so later entries
/// win just as they do at the leaves.
///
/// An empty path key carries no final segment and is skipped.
///
/// To rebuild into attribute-accessible form instead of plain maps, compose
/// with [`to_dot`](crate::to_dot): `to_dot(Value::Map(unflatten(&flat)))`.
pub fn unflatten(flat: &FlatMap) -> Map {
    let mut nested = Map::new();
    for (key, value) in flat {
        match key {
            FlatKey::Path(path) => {
                let Some((last, parents)) = path.segments().split_last() else {
                    continue;
                };
                let mut current = &mut nested;
                for segment in parents {
                    let slot = current
                        .entry(segment.clone())
                        .or_insert_with(|| Value::Map(Map::new()));
                    if !matches!(slot, Value::Map(_)) {
                        *slot = Value::Map(Map::new());
                    }
                    current = match slot {
                        Value::Map(m) => m,
                        _ => unreachable!("intermediate slot was just made a map"),
                    };
                }
                current.insert(last.clone(), value.clone());
            }
            FlatKey::Key(plain) => {
                nested.insert(plain.clone(), value.clone());
            }
        }
    }
    nested
}
