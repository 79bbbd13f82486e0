//! Tests for [`Value`] serialisation and deserialisation.

use serde_json::json;

use crate::{Thunk, Value, ValueKind};

fn tree(json: serde_json::Value) -> Value {
    serde_json::from_value(json).expect("valid tree")
}

#[test]
fn deserialize_scalars() {
    assert_eq!(tree(json!("hello")), Value::from("hello"));
    assert_eq!(tree(json!(1234)), Value::from(1234.0));
    assert_eq!(tree(json!(1.5)), Value::from(1.5));
    assert_eq!(tree(json!(false)), Value::from(false));
}

fn record_field_names(record: &Value) -> Vec<&str> {
    let Value::Record(fields) = record else {
        panic!("expected a record, got {record:?}");
    };
    fields.keys().map(String::as_str).collect()
}

#[test]
fn deserialize_structures_preserve_order() {
    // Both routes must keep insertion order: the streaming path through
    // the visitor, and the `from_value` path used by test helpers (which
    // relies on serde_json's preserve_order feature).
    let streamed: Value = serde_json::from_str(r#"{"b": 1, "a": 2}"#).expect("valid tree");
    assert_eq!(record_field_names(&streamed), vec!["b", "a"]);

    let converted = tree(json!({"b": 1, "a": 2}));
    assert_eq!(record_field_names(&converted), vec!["b", "a"]);

    let sequence = tree(json!([1, "two", true]));
    assert_eq!(
        sequence,
        Value::from(vec![Value::from(1.0), Value::from("two"), Value::from(true)])
    );
}

#[test]
fn deserialize_rejects_null() {
    let result: Result<Value, _> = serde_json::from_value(json!(null));
    assert!(result.is_err(), "the value model has no null kind");
}

#[test]
fn serialize_round_trips_without_callables() {
    let original = tree(json!({"flag": true, "items": [1, "two"]}));
    let json = serde_json::to_value(&original).expect("serialize");
    assert_eq!(tree(json), original);
}

#[test]
fn serialize_rejects_callables() {
    let value = Value::Callable(Thunk::new(|| Value::from(0.0)));
    let result = serde_json::to_value(&value);
    let message = result.expect_err("callables are opaque").to_string();
    assert!(
        message.contains("callable values cannot be serialised"),
        "unexpected message: {message}"
    );
}

#[test]
fn value_kind_serde_round_trip() {
    let json = serde_json::to_string(&ValueKind::Sequence).expect("serialize");
    assert_eq!(json, "\"sequence\"");
    let parsed: ValueKind = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, ValueKind::Sequence);
}
