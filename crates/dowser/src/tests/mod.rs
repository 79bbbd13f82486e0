//! Unit tests for the `dowser` matcher and strategy library.

use dowser_core::Value;

mod leaf_tests;

mod behaviour;

/// Builds a value tree from a JSON literal.
fn tree(json: serde_json::Value) -> Value {
    serde_json::from_value(json).expect("valid tree")
}

/// The demonstration tree from the end-to-end property.
fn demo_tree() -> Value {
    tree(serde_json::json!({
        "supportsExtendedSearch": false,
        "array": [
            "list of things",
            1234,
            {
                "deeper": {"supported": false},
                "supported": true
            }
        ]
    }))
}
