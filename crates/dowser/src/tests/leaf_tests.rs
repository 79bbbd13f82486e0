//! Tests for the leaf strategies.

use rstest::rstest;

use dowser_core::{Thunk, Value, ValueKind};

use crate::{MatcherBuilder, equal_to, identity, of_kind};

fn leaf_search(strategy: crate::Strategy, root: &Value) -> Option<Value> {
    MatcherBuilder::new()
        .scalars(strategy.clone())
        .callable(strategy)
        .build()
        .search(root)
        .expect("leaf strategy assigned for all leaf kinds")
}

#[rstest]
#[case::text(Value::from(""))]
#[case::zero(Value::from(0.0))]
#[case::falsy(Value::from(false))]
fn identity_matches_falsy_payloads(#[case] root: Value) {
    // `None` is the only no-match; falsy payloads are legitimate matches.
    assert_eq!(leaf_search(identity(), &root), Some(root));
}

#[test]
fn equal_to_requires_matching_value() {
    assert_eq!(
        leaf_search(equal_to(Value::from(1234.0)), &Value::from(1234.0)),
        Some(Value::from(1234.0))
    );
    assert_eq!(
        leaf_search(equal_to(Value::from(1234.0)), &Value::from(99.0)),
        None
    );
}

#[test]
fn equal_to_requires_matching_kind() {
    assert_eq!(
        leaf_search(equal_to(Value::from("1234")), &Value::from(1234.0)),
        None
    );
    assert_eq!(
        leaf_search(equal_to(Value::from(0.0)), &Value::from(false)),
        None
    );
}

#[test]
fn equal_to_compares_callables_by_identity() {
    let thunk = Thunk::new(|| Value::from(1.0));
    let same = Value::from(thunk.clone());
    let other = Value::from(Thunk::new(|| Value::from(1.0)));

    assert_eq!(
        leaf_search(equal_to(Value::from(thunk)), &same),
        Some(same.clone())
    );
    assert_eq!(leaf_search(equal_to(same.clone()), &other), None);
}

#[rstest]
#[case::boolean_hit(ValueKind::Boolean, Value::from(false), true)]
#[case::boolean_miss(ValueKind::Boolean, Value::from("false"), false)]
#[case::text_hit(ValueKind::Text, Value::from(""), true)]
#[case::number_miss(ValueKind::Number, Value::from(true), false)]
fn of_kind_matches_on_kind_alone(
    #[case] expected: ValueKind,
    #[case] root: Value,
    #[case] matches: bool,
) {
    let found = leaf_search(of_kind(expected), &root);
    assert_eq!(found, matches.then(|| root));
}

#[test]
fn callables_are_matched_without_being_invoked() {
    let root = Value::from(Thunk::new(|| panic!("the search must not invoke callables")));
    let found = leaf_search(of_kind(ValueKind::Callable), &root);
    assert_eq!(found, Some(root));
}
