//! Demonstration consumer: searches a small configuration-like tree for
//! its most deeply nested `supported` flag.
#![expect(
    clippy::print_stdout,
    reason = "demonstration binary reports its result on stdout"
)]

use dowser::{MatcherBuilder, Value, ValueKind, deepest_match, of_kind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tree: Value = serde_json::from_str(
        r#"{
            "supportsExtendedSearch": false,
            "array": [
                "list of things",
                1234,
                {
                    "deeper": {"supported": false},
                    "supported": true
                }
            ]
        }"#,
    )?;

    let supported = MatcherBuilder::for_field("supported", deepest_match())
        .sequence(deepest_match())
        .scalars(of_kind(ValueKind::Boolean))
        .build();

    println!("Should be true: {:?}", supported.search(&tree)?);
    Ok(())
}
