//! Deep merge for nested mappings.

use crate::dot::DotMap;
use crate::value::{Map, Value};

/// Merges `overlay` into `base`, returning a new mapping.
///
/// Every key of `overlay` is present in the result. Where both sides hold a
/// plain mapping the two are merged recursively; where both sides hold a
/// [`DotMap`] their backing stores are merged and the result stays a
/// `DotMap`. Any other combination replaces the base value wholesale — in
/// particular, a plain-map/dot-map mismatch does not merge across kinds:
/// recursing there could push a reserved key into a `DotMap`, and merge never
/// fails. Keys only in `base` are carried over unchanged, and neither input
/// is mutated.
///
/// # Example
/// ```
/// use nestmap::{merge, Map, Value};
///
/// let base = Value::from(serde_json::json!({"a": {"x": 1}, "b": 2}));
/// let overlay = Value::from(serde_json::json!({"a": {"y": 3}}));
/// let merged = merge(base.as_map().unwrap(), overlay.as_map().unwrap());
///
/// let a = merged["a"].as_map().unwrap();
/// assert_eq!(a["x"], Value::Int(1));
/// assert_eq!(a["y"], Value::Int(3));
/// assert_eq!(merged["b"], Value::Int(2));
/// ```
pub fn merge(base: &Map, overlay: &Map) -> Map {
    let mut merged = base.clone();
    for (key, value) in overlay {
        match (merged.get(key), value) {
            (Some(Value::Map(a)), Value::Map(b)) => {
                let nested = merge(a, b);
                merged.insert(key.clone(), Value::Map(nested));
            }
            (Some(Value::Dot(a)), Value::Dot(b)) => {
                // Both stores already passed the reserved-key check, so the
                // union does too.
                let nested = merge(a.as_map(), b.as_map());
                merged.insert(key.clone(), Value::Dot(DotMap::from_validated(nested)));
            }
            _ => {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(json: serde_json::Value) -> Map {
        match Value::from(json) {
            Value::Map(m) => m,
            other => panic!("expected an object, got {other:?}"),
        }
    }

    #[test]
    fn overlay_value_wins_for_scalar_keys() {
        let merged = merge(&map(json!({"x": 1})), &map(json!({"x": 2})));
        assert_eq!(merged, map(json!({"x": 2})));
    }

    #[test]
    fn keys_only_in_base_are_kept() {
        let merged = merge(&map(json!({"a": 1, "b": 2})), &map(json!({"b": 3})));
        assert_eq!(merged, map(json!({"a": 1, "b": 3})));
    }

    #[test]
    fn nested_mappings_merge_recursively() {
        let base = map(json!({"cfg": {"host": "localhost", "port": 80, "tls": {"on": false}}}));
        let overlay = map(json!({"cfg": {"port": 443, "tls": {"on": true}}}));
        let merged = merge(&base, &overlay);

        assert_eq!(
            merged,
            map(json!({"cfg": {"host": "localhost", "port": 443, "tls": {"on": true}}}))
        );
    }

    #[test]
    fn mapping_over_scalar_replaces_without_partial_merge() {
        let merged = merge(&map(json!({"a": 1})), &map(json!({"a": {"b": 2}})));
        assert_eq!(merged, map(json!({"a": {"b": 2}})));

        let merged = merge(&map(json!({"a": {"b": 2}})), &map(json!({"a": 1})));
        assert_eq!(merged, map(json!({"a": 1})));
    }

    #[test]
    fn inputs_are_not_mutated() {
        let base = map(json!({"x": 1, "nested": {"y": 2}}));
        let overlay = map(json!({"x": 2, "nested": {"y": 3}}));
        let base_before = base.clone();
        let overlay_before = overlay.clone();

        let merged = merge(&base, &overlay);
        assert_eq!(merged["x"], Value::Int(2));
        assert_eq!(base, base_before);
        assert_eq!(overlay, overlay_before);
    }

    #[test]
    fn dot_maps_merge_when_both_sides_are_dot() {
        let base_inner = DotMap::from_map(map(json!({"a": 1, "b": 2}))).unwrap();
        let overlay_inner = DotMap::from_map(map(json!({"b": 9}))).unwrap();

        let mut base = Map::new();
        base.insert("d".to_string(), Value::Dot(base_inner));
        let mut overlay = Map::new();
        overlay.insert("d".to_string(), Value::Dot(overlay_inner));

        let merged = merge(&base, &overlay);
        let d = merged["d"].as_dot().unwrap();
        assert_eq!(d["a"], Value::Int(1));
        assert_eq!(d["b"], Value::Int(9));
    }

    #[test]
    fn dot_map_versus_plain_map_is_replacement() {
        let base_inner = DotMap::from_map(map(json!({"a": 1}))).unwrap();
        let mut base = Map::new();
        base.insert("d".to_string(), Value::Dot(base_inner));

        let overlay = map(json!({"d": {"b": 2}}));
        let merged = merge(&base, &overlay);
        assert_eq!(merged["d"], Value::Map(map(json!({"b": 2}))));
    }

    #[test]
    fn merging_with_empty_overlay_copies_base() {
        let base = map(json!({"a": {"b": 1}}));
        assert_eq!(merge(&base, &Map::new()), base);
    }
}
