//! Record-level operations over [`serde_json::Map`].
//!
//! Only `Value::Object` is recursed into. Arrays, strings, numbers, booleans
//! and `null` are leaves everywhere in this module.

use serde_json::{Map, Value};

/// Shallow merge: keys of `overrides` replace keys of `base`.
///
/// Keys already present in `base` keep their position.
#[must_use]
pub fn merge_objects(
    base: &Map<String, Value>,
    overrides: &Map<String, Value>,
) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// ## Summary
/// Recursively merges `source` into `target` and returns `target`.
///
/// When both sides hold an object under the same key the two objects are
/// merged; in every other case the value from `source` replaces the value in
/// `target`. Arrays are replaced as a whole, never merged element-wise, and an
/// object can replace a scalar (and vice versa).
///
/// ## Side Effects
/// Mutates `target` in place.
pub fn deep_merge<'a>(
    target: &'a mut Map<String, Value>,
    source: &Map<String, Value>,
) -> &'a mut Map<String, Value> {
    for (key, incoming) in source {
        if let (Some(Value::Object(existing)), Value::Object(nested)) =
            (target.get_mut(key), incoming)
        {
            deep_merge(existing, nested);
            continue;
        }
        target.insert(key.clone(), incoming.clone());
    }
    target
}

/// ## Summary
/// Flattens nested objects into a single-level map keyed by dotted paths.
///
/// `{"a": {"b": 1}, "c": [1, 2]}` becomes `{"a.b": 1, "c": [1, 2]}`. Arrays are
/// kept as they are and an empty nested object contributes no key at all.
/// `prefix` is prepended verbatim to every produced key.
#[must_use]
pub fn flatten_object(obj: &Map<String, Value>, prefix: &str) -> Map<String, Value> {
    let mut flat = Map::new();
    flatten_into(obj, prefix, &mut flat);
    flat
}

fn flatten_into(obj: &Map<String, Value>, prefix: &str, flat: &mut Map<String, Value>) {
    for (key, value) in obj {
        match value {
            Value::Object(nested) => flatten_into(nested, &format!("{prefix}{key}."), flat),
            leaf => {
                flat.insert(format!("{prefix}{key}"), leaf.clone());
            }
        }
    }
}

/// ## Summary
/// Lists the dotted paths of every leaf, in insertion order.
///
/// Uses the same traversal as [`flatten_object`], so the two always agree on
/// the set of paths. Unlike the flattened map, the list keeps duplicates when
/// a literal dotted key collides with a nested path.
#[must_use]
pub fn get_object_keys(obj: &Map<String, Value>, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    collect_keys(obj, prefix, &mut keys);
    keys
}

fn collect_keys(obj: &Map<String, Value>, prefix: &str, keys: &mut Vec<String>) {
    for (key, value) in obj {
        if let Value::Object(nested) = value {
            collect_keys(nested, &format!("{prefix}{key}."), keys);
        } else {
            keys.push(format!("{prefix}{key}"));
        }
    }
}

/// ## Summary
/// Returns a copy of `obj` without `null` entries, at every object level.
///
/// Arrays are copied untouched, including any `null` elements they contain.
#[must_use]
pub fn remove_null_undefined(obj: &Map<String, Value>) -> Map<String, Value> {
    obj.iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            let value = match value {
                Value::Object(nested) => Value::Object(remove_null_undefined(nested)),
                other => other.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

/// ## Summary
/// Structural deep copy of a value.
///
/// Every object and array in the result is a fresh allocation, so mutating
/// the copy never affects `value`. Only plain data can live in a [`Value`];
/// callers holding functions, native dates or shared references must convert
/// them before cloning.
#[must_use]
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => Value::Number(n.clone()),
        Value::String(s) => Value::String(s.clone()),
        Value::Array(items) => Value::Array(items.iter().map(deep_clone).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, nested)| (key.clone(), deep_clone(nested)))
                .collect(),
        ),
    }
}

/// Looks up `key`; `None` stands for a missing key.
#[must_use]
pub fn get_value<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key)
}

/// Same lookup as [`get_value`], kept as a separate name for callers that
/// probe keys which may not exist.
#[must_use]
pub fn get_safe_value<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    get_value(obj, key)
}

/// Inserts or replaces `key`.
pub fn set_value(obj: &mut Map<String, Value>, key: impl Into<String>, value: Value) {
    obj.insert(key.into(), value);
}

/// Deletes `key`, keeping the order of the remaining keys.
pub fn remove_property(obj: &mut Map<String, Value>, key: &str) {
    obj.shift_remove(key);
}
