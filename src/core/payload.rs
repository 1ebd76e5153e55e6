//! Flattened input payload.

use super::path;
use serde::Serialize;
use serde_json::{Map, Value};

/// Input payload flattened into `dot-path -> value` pairs.
///
/// Flattening is done once per validation run; rules receive the payload by
/// shared reference and never mutate it. Keys keep the order in which they
/// appear in the input document.
///
/// # Example
///
/// ```rust
/// use equality_validation::core::Payload;
/// use serde_json::json;
///
/// let payload = Payload::flatten(&json!({
///     "items": [{ "reference_id": 1, "target_id": 2 }],
/// }));
///
/// assert_eq!(payload.get("items.0.target_id"), Some(&json!(2)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Payload {
    entries: Map<String, Value>,
}

impl Payload {
    /// Flatten a JSON document.
    ///
    /// Non-empty objects and arrays are expanded; scalars, empty objects and
    /// empty arrays become leaf values. A scalar root is stored under the
    /// empty key.
    pub fn flatten(input: &Value) -> Self {
        let mut entries = Map::new();
        flatten_into(&mut entries, "", input);
        Self { entries }
    }

    /// Value stored at `path`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.entries.get(path)
    }

    /// Whether `path` is present (a null value counts as present).
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Value)> for Payload {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn flatten_into(entries: &mut Map<String, Value>, prefix: &str, value: &Value) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, nested) in map {
                flatten_into(entries, &path::join(prefix, key), nested);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (index, nested) in items.iter().enumerate() {
                flatten_into(entries, &path::join(prefix, &index.to_string()), nested);
            }
        }
        leaf => {
            entries.insert(prefix.to_string(), leaf.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_nested_objects_and_arrays() {
        let payload = Payload::flatten(&json!({
            "reference_id": 1,
            "data": { "target_id": 2 },
            "items": [
                { "reference_id": 3, "target_id": 4 },
                { "reference_id": 5, "target_id": null },
            ],
        }));

        assert_eq!(payload.get("reference_id"), Some(&json!(1)));
        assert_eq!(payload.get("data.target_id"), Some(&json!(2)));
        assert_eq!(payload.get("items.0.target_id"), Some(&json!(4)));
        assert_eq!(payload.get("items.1.reference_id"), Some(&json!(5)));
        assert_eq!(payload.get("items.1.target_id"), Some(&Value::Null));
        assert!(payload.contains("items.1.target_id"));
        assert_eq!(payload.len(), 6);
    }

    #[test]
    fn empty_containers_are_leaves() {
        let payload = Payload::flatten(&json!({ "items": [], "meta": {} }));

        assert_eq!(payload.get("items"), Some(&json!([])));
        assert_eq!(payload.get("meta"), Some(&json!({})));
    }

    #[test]
    fn keys_follow_document_order() {
        let payload = Payload::flatten(&json!({
            "items": [{ "b": 1, "a": 2 }, { "b": 3, "a": 4 }],
        }));

        let keys: Vec<&str> = payload.keys().collect();
        assert_eq!(keys, vec!["items.0.b", "items.0.a", "items.1.b", "items.1.a"]);
    }

    #[test]
    fn missing_path_is_absent() {
        let payload = Payload::flatten(&json!({ "data": { "reference_id": 1 } }));

        assert!(payload.get("reference_id").is_none());
        assert!(!payload.contains("data"));
    }
}
