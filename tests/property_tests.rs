//! Property-based tests for path handling and record comparison.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use equality_validation::core::{path, EntityType, Payload, Record};
use equality_validation::rules::{EqualityRule, FieldContext};
use equality_validation::store::MemoryStore;
use proptest::prelude::*;
use serde_json::{json, Value};

const REFERENCE: &str = "app::Reference";
const TARGET: &str = "app::Target";

prop_compose! {
    fn segment()(name in "[a-z][a-z_]{0,8}") -> String {
        name
    }
}

prop_compose! {
    fn attribute_path()(segments in prop::collection::vec(segment(), 1..5)) -> String {
        segments.join(".")
    }
}

fn arbitrary_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[A-Za-z0-9 ]{0,6}".prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
    ]
}

fn rule_for(reference: Value, target: Value, same_line: bool) -> EqualityRule {
    let mut store = MemoryStore::new();
    store.insert(&EntityType::new(REFERENCE), Record::new().with("code", reference));
    store.insert(&EntityType::new(TARGET), Record::new().with("code", target));

    EqualityRule::builder()
        .reference(REFERENCE, "code")
        .target(TARGET, "code")
        .target_attribute("rows.*.target_id")
        .same_line(same_line)
        .store(store)
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn leaf_is_last_segment(path in attribute_path()) {
        let expected = path.split('.').last().unwrap().to_string();
        prop_assert_eq!(path::leaf(&path), expected.as_str());
    }

    #[test]
    fn replace_leaf_keeps_prefix(path in attribute_path(), leaf in segment()) {
        let replaced = path::replace_leaf(&path, &leaf);

        prop_assert_eq!(path::leaf(&replaced), leaf.as_str());
        prop_assert_eq!(
            replaced.split('.').count(),
            path.split('.').count()
        );
        let prefix_len = path.len() - path::leaf(&path).len();
        prop_assert_eq!(&replaced[..prefix_len], &path[..prefix_len]);
    }

    #[test]
    fn wildcard_matches_any_index(index in 0usize..1000, leaf in segment()) {
        let pattern = format!("rows.*.{leaf}");
        let concrete = format!("rows.{index}.{leaf}");
        prop_assert!(path::matches(&pattern, &concrete));
    }

    #[test]
    fn flatten_exposes_every_row(ids in prop::collection::vec(any::<u32>(), 1..10)) {
        let rows: Vec<Value> = ids.iter().map(|id| json!({ "id": id })).collect();
        let payload = Payload::flatten(&json!({ "rows": rows }));

        prop_assert_eq!(payload.len(), ids.len());
        for (index, id) in ids.iter().enumerate() {
            let expected = json!(id);
            prop_assert_eq!(payload.get(&format!("rows.{index}.id")), Some(&expected));
        }
    }

    #[test]
    fn equal_values_always_pass(value in arbitrary_scalar(), row in 0usize..20) {
        let rule = rule_for(value.clone(), value, true);
        let attribute = format!("rows.{row}.reference_id");
        let data: Payload = [
            (attribute.clone(), json!(1)),
            (format!("rows.{row}.target_id"), json!(1)),
        ]
        .into_iter()
        .collect();

        let comparison = rule.compare(&FieldContext::new(&attribute, &data)).unwrap();
        prop_assert!(comparison.passes());
    }

    #[test]
    fn differing_values_always_fail(a in arbitrary_scalar(), b in arbitrary_scalar()) {
        prop_assume!(a != b);
        let rule = rule_for(a, b, false);
        let data = Payload::flatten(&json!({ "reference_id": 1, "target_id": 1 }));

        let comparison = rule.compare(&FieldContext::new("reference_id", &data)).unwrap();
        prop_assert!(!comparison.passes());
    }

    #[test]
    fn case_changes_are_mismatches(text in "[a-z]{1,8}") {
        let rule = rule_for(json!(text.clone()), json!(text.to_uppercase()), false);
        let data = Payload::flatten(&json!({ "reference_id": 1, "target_id": 1 }));

        let comparison = rule.compare(&FieldContext::new("reference_id", &data)).unwrap();
        prop_assert!(!comparison.passes());
    }

    #[test]
    fn unknown_ids_always_pass(
        reference_id in 2u64..1000,
        target_id in 2u64..1000,
        a in arbitrary_scalar(),
        b in arbitrary_scalar(),
    ) {
        let rule = rule_for(a, b, false);
        let data = Payload::flatten(&json!({ "reference_id": 1, "target_id": target_id }));
        prop_assert!(rule.compare(&FieldContext::new("reference_id", &data)).unwrap().passes());

        let data = Payload::flatten(&json!({ "reference_id": reference_id, "target_id": 1 }));
        prop_assert!(rule.compare(&FieldContext::new("reference_id", &data)).unwrap().passes());
    }
}
