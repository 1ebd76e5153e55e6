//! Violations grouped per attribute.

use crate::rules::Violation;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Failure messages keyed by concrete attribute path, in the order the
/// attributes were validated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors {
    messages: Vec<(String, Vec<String>)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, attribute: impl Into<String>, message: impl Into<String>) {
        let attribute = attribute.into();
        match self.messages.iter_mut().find(|(key, _)| *key == attribute) {
            Some((_, messages)) => messages.push(message.into()),
            None => self.messages.push((attribute, vec![message.into()])),
        }
    }

    /// Whether any message was recorded for `attribute`.
    pub fn has(&self, attribute: &str) -> bool {
        self.get(attribute).is_some()
    }

    pub fn get(&self, attribute: &str) -> Option<&[String]> {
        self.messages
            .iter()
            .find(|(key, _)| key == attribute)
            .map(|(_, messages)| messages.as_slice())
    }

    pub fn first(&self, attribute: &str) -> Option<&str> {
        self.get(attribute)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(|(key, _)| key.as_str())
    }

    /// Every message, attribute by attribute.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .flat_map(|(_, messages)| messages.iter().map(String::as_str))
    }

    /// Number of attributes with at least one message.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// JSON object of `attribute -> [messages]`.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .messages
            .iter()
            .map(|(key, messages)| (key.clone(), Value::from(messages.clone())))
            .collect();
        Value::Object(map)
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.messages.len()))?;
        for (attribute, messages) in &self.messages {
            map.serialize_entry(attribute, messages)?;
        }
        map.end()
    }
}

impl<'a> FromIterator<&'a Violation> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = &'a Violation>>(iter: I) -> Self {
        let mut errors = Self::new();
        for violation in iter {
            errors.add(violation.attribute.clone(), violation.message.clone());
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn groups_messages_per_attribute() {
        let mut errors = ValidationErrors::new();
        errors.add("items.1.reference_id", "first");
        errors.add("items.1.reference_id", "second");
        errors.add("reference_id", "third");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first("items.1.reference_id"), Some("first"));
        assert_eq!(errors.get("items.1.reference_id").map(<[String]>::len), Some(2));
        assert!(!errors.has("items.0.reference_id"));
        assert_eq!(errors.all().count(), 3);
    }

    #[test]
    fn json_shape() {
        let errors: ValidationErrors = [Violation::new("code", "bad")].iter().collect();

        assert_eq!(errors.to_json(), json!({ "code": ["bad"] }));
        assert_eq!(serde_json::to_value(&errors).unwrap(), errors.to_json());
        assert_eq!(errors.attributes().collect::<Vec<_>>(), vec!["code"]);
    }
}
