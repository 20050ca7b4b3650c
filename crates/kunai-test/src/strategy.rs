//! `proptest` strategies for nested JSON-like data.

use proptest::prelude::*;
use serde_json::{Map, Value};

/// Short lowercase keys, so that generated objects share keys often enough
/// to exercise merging.
#[must_use]
pub fn key() -> impl Strategy<Value = String> {
    "[a-e]{1,2}"
}

/// Any scalar: `null`, booleans, integers and short strings.
#[must_use]
pub fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z ]{0,6}".prop_map(Value::String),
    ]
}

/// Values nested up to four levels deep, arrays included.
#[must_use]
pub fn value() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((key(), inner), 0..5)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

/// A top-level record.
#[must_use]
pub fn object() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::vec((key(), value()), 0..6).prop_map(|entries| entries.into_iter().collect())
}
