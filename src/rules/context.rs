//! Context provided to rules for a single field.

use crate::core::Payload;
use serde_json::Value;

/// Context provided to a rule for one concrete attribute
#[derive(Clone, Copy, Debug)]
pub struct FieldContext<'a> {
    /// Concrete attribute path, wildcards already resolved (`items.1.reference_id`)
    pub attribute: &'a str,
    /// Value under validation, `None` when the attribute is absent
    pub value: Option<&'a Value>,
    /// Whole input payload, flattened
    pub data: &'a Payload,
}

impl<'a> FieldContext<'a> {
    /// Context for `attribute`, reading its value from `data`.
    pub fn new(attribute: &'a str, data: &'a Payload) -> Self {
        Self {
            attribute,
            value: data.get(attribute),
            data,
        }
    }

    /// Value under validation unless it is absent or null.
    pub fn present_value(&self) -> Option<&'a Value> {
        self.value.filter(|value| !value.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_value_from_payload() {
        let data = Payload::flatten(&json!({ "items": [{ "reference_id": 4 }] }));
        let ctx = FieldContext::new("items.0.reference_id", &data);

        assert_eq!(ctx.value, Some(&json!(4)));
        assert_eq!(ctx.present_value(), Some(&json!(4)));
    }

    #[test]
    fn null_value_is_not_present() {
        let data = Payload::flatten(&json!({ "reference_id": null }));
        let ctx = FieldContext::new("reference_id", &data);

        assert_eq!(ctx.value, Some(&Value::Null));
        assert_eq!(ctx.present_value(), None);
    }
}
