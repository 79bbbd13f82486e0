//! Behaviour-driven tests for the `dowser` search pipeline.

use std::str::FromStr;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use dowser_core::{Value, ValueKind};

use crate::{Matcher, MatcherBuilder, deepest_match, of_kind};

use super::demo_tree;

// ---------------------------------------------------------------------------
// Typed wrappers for Gherkin step parameters
// ---------------------------------------------------------------------------

/// A quoted string value from a Gherkin feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuotedString(String);

impl FromStr for QuotedString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim_matches('"').to_owned()))
    }
}

impl QuotedString {
    fn as_str(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Test world
// ---------------------------------------------------------------------------

#[derive(Default)]
struct TestWorld {
    tree: Option<Value>,
    matcher: Option<Matcher>,
    found: Option<Option<Value>>,
}

#[fixture]
fn world() -> TestWorld {
    TestWorld::default()
}

// ---------------------------------------------------------------------------
// Given steps
// ---------------------------------------------------------------------------

#[given("the demonstration tree")]
fn given_demo_tree(world: &mut TestWorld) {
    world.tree = Some(demo_tree());
}

#[given("a matcher preferring field {name} with a deepest-match fallback")]
fn given_field_matcher(world: &mut TestWorld, name: QuotedString) {
    let matcher = MatcherBuilder::for_field(name.as_str(), deepest_match())
        .sequence(deepest_match())
        .scalars(of_kind(ValueKind::Boolean))
        .build();
    world.matcher = Some(matcher);
}

// ---------------------------------------------------------------------------
// When steps
// ---------------------------------------------------------------------------

#[when("the tree is searched")]
fn when_search(world: &mut TestWorld) {
    let matcher = world.matcher.as_ref().expect("matcher should be set");
    let tree = world.tree.as_ref().expect("tree should be set");
    world.found = Some(matcher.search(tree).expect("matcher is fully configured"));
}

// ---------------------------------------------------------------------------
// Then steps
// ---------------------------------------------------------------------------

#[then("the search finds the boolean {expected}")]
fn then_found_boolean(world: &mut TestWorld, expected: QuotedString) {
    let found = world.found.as_ref().expect("search should have run");
    let flag = match expected.as_str() {
        "true" => true,
        "false" => false,
        other => panic!("not a boolean literal: {other}"),
    };
    assert_eq!(found.as_ref(), Some(&Value::from(flag)));
}

// ---------------------------------------------------------------------------
// Scenario registration
// ---------------------------------------------------------------------------

#[scenario(path = "tests/features/search.feature")]
fn search_behaviour(world: TestWorld) {
    let _ = world;
}
