//! Rule sets: which rules run on which attributes.
//!
//! A [`RuleSet`] maps attribute keys, possibly containing `*` wildcards, to
//! rules. Validating a payload flattens it once, expands every key against
//! the flattened paths and runs each rule on each concrete attribute. All
//! violations are accumulated instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use equality_validation::core::{EntityType, Record};
//! use equality_validation::rules::EqualityRule;
//! use equality_validation::store::MemoryStore;
//! use equality_validation::validator::RuleSet;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let orders = EntityType::new("shop::Order");
//! let invoices = EntityType::new("billing::Invoice");
//! let mut store = MemoryStore::new();
//! store.insert(&orders, Record::new().with("currency", "EUR"));
//! store.insert(&invoices, Record::new().with("currency", "EUR"));
//! store.insert(&invoices, Record::new().with("currency", "USD"));
//!
//! let rules = RuleSet::builder()
//!     .field(
//!         "lines.*.order_id",
//!         EqualityRule::builder()
//!             .reference(orders, "currency")
//!             .target(invoices, "currency")
//!             .target_attribute("lines.*.invoice_id")
//!             .store(store)
//!             .build()
//!             .unwrap(),
//!     )
//!     .build();
//!
//! let errors = rules
//!     .errors(&json!({
//!         "lines": [
//!             { "order_id": 1, "invoice_id": 1 },
//!             { "order_id": 1, "invoice_id": 2 },
//!         ],
//!     }))
//!     .unwrap();
//!
//! assert!(!errors.has("lines.0.order_id"));
//! assert!(errors.has("lines.1.order_id"));
//! ```

mod errors;

pub use errors::ValidationErrors;

use crate::core::{path, Payload};
use crate::rules::{FieldContext, Rule, RuleError, Violation};
use serde_json::Value;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

struct FieldRules {
    key: String,
    rules: Vec<Box<dyn Rule>>,
}

/// Attribute keys and the rules applied to them.
pub struct RuleSet {
    fields: Vec<FieldRules>,
}

impl RuleSet {
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::new()
    }

    /// Concrete attributes a key applies to, in payload order.
    ///
    /// A key without wildcards applies only when that attribute is present
    /// (a null value counts as present). A wildcard key applies to every
    /// flattened path, or path prefix, matching it segment by segment.
    pub fn attributes_for(&self, key: &str, data: &Payload) -> Vec<String> {
        if !path::is_pattern(key) {
            return if data.contains(key) {
                vec![key.to_string()]
            } else {
                Vec::new()
            };
        }

        let depth = key.split(path::SEPARATOR).count();
        let mut attributes: Vec<String> = Vec::new();
        for concrete in data.keys() {
            let candidate = truncate(concrete, depth);
            if let Some(candidate) = candidate {
                if path::matches(key, candidate) && !attributes.iter().any(|a| a == candidate) {
                    attributes.push(candidate.to_string());
                }
            }
        }
        attributes
    }

    /// Validate a JSON document.
    pub fn validate(
        &self,
        input: &Value,
    ) -> Result<Validation<(), NonEmptyVec<Violation>>, RuleError> {
        self.validate_payload(&Payload::flatten(input))
    }

    /// Validate an already flattened payload, accumulating ALL violations.
    pub fn validate_payload(
        &self,
        data: &Payload,
    ) -> Result<Validation<(), NonEmptyVec<Violation>>, RuleError> {
        let mut checks: Vec<Validation<(), NonEmptyVec<Violation>>> = Vec::new();

        for field in &self.fields {
            let attributes = self.attributes_for(&field.key, data);
            tracing::trace!(
                key = %field.key,
                matched = attributes.len(),
                "Expanded attribute key"
            );

            for attribute in &attributes {
                let ctx = FieldContext::new(attribute, data);
                for rule in &field.rules {
                    let check = rule.check(&ctx).map_err(|error| {
                        tracing::debug!(
                            attribute = %attribute,
                            rule = rule.name(),
                            %error,
                            "Rule aborted validation"
                        );
                        error
                    })?;
                    checks.push(check);
                }
            }
        }

        Ok(Validation::all_vec(checks).map(|_| ()))
    }

    /// Violations grouped per attribute; empty when the payload is valid.
    pub fn errors(&self, input: &Value) -> Result<ValidationErrors, RuleError> {
        match self.validate(input)? {
            Validation::Success(_) => Ok(ValidationErrors::new()),
            Validation::Failure(violations) => Ok(violations.iter().collect()),
        }
    }

    pub fn passes(&self, input: &Value) -> Result<bool, RuleError> {
        Ok(self.validate(input)?.is_success())
    }
}

/// First `depth` segments of `path`, if it has that many.
fn truncate(path: &str, depth: usize) -> Option<&str> {
    if depth == 0 {
        return None;
    }
    let mut seen = 0;
    for (index, ch) in path.char_indices() {
        if ch == path::SEPARATOR {
            seen += 1;
            if seen == depth {
                return Some(&path[..index]);
            }
        }
    }
    (seen + 1 == depth).then_some(path)
}

/// Builder for [`RuleSet`]
pub struct RuleSetBuilder {
    fields: Vec<FieldRules>,
}

impl RuleSetBuilder {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a rule for an attribute key; keys may repeat.
    pub fn field(mut self, key: impl Into<String>, rule: impl Rule + 'static) -> Self {
        let key = key.into();
        let rule: Box<dyn Rule> = Box::new(rule);
        match self.fields.iter_mut().find(|field| field.key == key) {
            Some(field) => field.rules.push(rule),
            None => self.fields.push(FieldRules {
                key,
                rules: vec![rule],
            }),
        }
        self
    }

    pub fn build(self) -> RuleSet {
        RuleSet {
            fields: self.fields,
        }
    }
}

impl Default for RuleSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
