//! Property-based tests for the comparison engine and the loaders.
//!
//! Trees are generated from a small alphabet so that identifier-keyed lists,
//! duplicate entries and shared keys show up often.

use proptest::prelude::*;
use semdiff::diff::{compare_documents, DetailKind};
use semdiff::model::{Mapping, Node};
use semdiff::parsers::{detect_format, parse_documents_str};

fn scalar() -> impl Strategy<Value = Node> {
    prop_oneof![
        Just(Node::Null),
        any::<bool>().prop_map(Node::Bool),
        (-5i64..5).prop_map(Node::Int),
        "[a-d]{1,3}".prop_map(Node::String),
    ]
}

fn key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("name".to_string()),
        Just("id".to_string()),
        "[a-e]",
    ]
}

fn node() -> impl Strategy<Value = Node> {
    scalar().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Node::Sequence),
            prop::collection::vec((key(), inner), 0..5)
                .prop_map(|entries| Node::Mapping(entries.into_iter().collect::<Mapping>())),
        ]
    })
}

/// The same tree with every mapping's entries in reverse order.
fn reverse_keys(node: &Node) -> Node {
    match node {
        Node::Mapping(mapping) => {
            let mut entries: Vec<(String, Node)> = mapping
                .iter()
                .map(|(key, value)| (key.clone(), reverse_keys(value)))
                .collect();
            entries.reverse();
            Node::Mapping(entries.into_iter().collect())
        }
        Node::Sequence(items) => Node::Sequence(items.iter().map(reverse_keys).collect()),
        other => other.clone(),
    }
}

fn mirrored(kind: DetailKind) -> DetailKind {
    match kind {
        DetailKind::Addition => DetailKind::Removal,
        DetailKind::Removal => DetailKind::Addition,
        other => other,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn comparing_a_tree_with_itself_finds_nothing(tree in node()) {
        let diffs = compare_documents(&tree, &tree).expect("compare");
        prop_assert!(diffs.is_empty(), "self diff: {:?}", diffs);
    }

    #[test]
    fn key_order_never_matters(tree in node()) {
        let diffs = compare_documents(&tree, &reverse_keys(&tree)).expect("compare");
        prop_assert!(diffs.is_empty(), "key order diff: {:?}", diffs);
    }

    #[test]
    fn swapping_inputs_mirrors_single_details(from in node(), to in node()) {
        let forward = compare_documents(&from, &to).expect("compare");
        let backward = compare_documents(&to, &from).expect("compare");

        for diff in forward.iter().filter(|diff| diff.details.len() == 1) {
            let detail = &diff.details[0];
            if !matches!(detail.kind, DetailKind::Addition | DetailKind::Removal | DetailKind::Modification) {
                continue;
            }
            let mirror = backward.iter().find(|other| other.path == diff.path);
            prop_assert!(mirror.is_some(), "no mirrored diff at {}", diff.path);
            let mirror = mirror.expect("checked above");
            prop_assert_eq!(mirror.details.len(), 1);
            prop_assert_eq!(mirror.details[0].kind, mirrored(detail.kind));
            prop_assert_eq!(&mirror.details[0].from, &detail.to);
            prop_assert_eq!(&mirror.details[0].to, &detail.from);
        }
    }

    #[test]
    fn type_changes_are_one_modification(left in scalar(), right in node()) {
        prop_assume!(left != Node::Null && right != Node::Null && left.kind() != right.kind());

        let diffs = compare_documents(&left, &right).expect("compare");
        prop_assert_eq!(diffs.len(), 1);
        prop_assert_eq!(diffs[0].details.len(), 1);
        prop_assert_eq!(diffs[0].details[0].kind, DetailKind::Modification);
    }

    #[test]
    fn loader_doesnt_panic(s in "\\PC{0,500}") {
        let _ = detect_format(&s);
        let _ = parse_documents_str(&s);
    }

    #[test]
    fn json_like_input_doesnt_panic(
        s in prop::string::string_regex(r#"\{[^\}]{0,200}\}"#).expect("regex")
    ) {
        let _ = parse_documents_str(&s);
    }
}
