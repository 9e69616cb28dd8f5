//! Property-based tests for token tree flattening
//!
//! Generated trees use keys without separators (and never the legacy `value` key), so every
//! leaf flattens to a distinct name and the token count is exactly the leaf count.

use dtcss_parser::{flatten, TokenValue};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,6}".prop_filter("legacy value key", |k| k != "value")
}

/// A token record or a nested group of them
fn node_strategy() -> impl Strategy<Value = Value> {
    let leaf = "#[0-9a-f]{6}".prop_map(|color| json!({ "$value": color }));
    leaf.prop_recursive(4, 64, 5, |inner| {
        prop::collection::btree_map(key_strategy(), inner, 1..5)
            .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>()))
    })
}

fn tree_strategy() -> impl Strategy<Value = Value> {
    prop::collection::btree_map(key_strategy(), node_strategy(), 1..5)
        .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>()))
}

fn count_records(value: &Value) -> usize {
    match value {
        Value::Object(map) if map.contains_key("$value") => 1,
        Value::Object(map) => map.values().map(count_records).sum(),
        _ => 0,
    }
}

fn leaf_values(value: &Value, out: &mut Vec<String>) {
    if let Value::Object(map) = value {
        if let Some(Value::String(v)) = map.get("$value") {
            out.push(v.clone());
            return;
        }
        for child in map.values() {
            leaf_values(child, out);
        }
    }
}

proptest! {
    #[test]
    fn one_token_per_record(tree in tree_strategy()) {
        let map = flatten(&tree);
        prop_assert_eq!(map.len(), count_records(&tree));
    }

    #[test]
    fn flattening_is_deterministic(tree in tree_strategy()) {
        let first: Vec<_> = flatten(&tree).into_iter().collect();
        let second: Vec<_> = flatten(&tree).into_iter().collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn output_follows_traversal_order(tree in tree_strategy()) {
        let mut expected = Vec::new();
        leaf_values(&tree, &mut expected);
        let actual: Vec<_> = flatten(&tree)
            .values()
            .map(|token| match &token.value {
                TokenValue::Literal(v) => v.clone(),
                other => panic!("unexpected value {other:?}"),
            })
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn names_join_the_path(tree in tree_strategy()) {
        for (name, token) in flatten(&tree) {
            prop_assert_eq!(name, token.path.join("-"));
        }
    }
}
