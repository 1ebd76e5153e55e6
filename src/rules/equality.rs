//! Cross-record equality rule.

use crate::core::{path, EntityType, Record};
use crate::rules::builder::EqualityRuleBuilder;
use crate::rules::context::FieldContext;
use crate::rules::violations::RuleError;
use crate::rules::Rule;
use crate::store::RecordStore;
use crate::translation::{replace_placeholders, Labeler};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Translation key of the mismatch message template.
pub const MESSAGE_KEY: &str =
    "equality-validation::validation.custom.line_reference_columns_equality";

/// Prefix of the translation keys used to label columns.
pub const ATTRIBUTE_LABEL_PREFIX: &str = "validation.attributes.";

/// Template used when the labeler has no line under the message key.
pub const DEFAULT_MESSAGE: &str = "The :reference_column of the selected :reference_model \
     must match the :target_column of the selected :target_model.";

/// Outcome of comparing the two records for one attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum Comparison {
    /// Reference id absent, null or unknown to the store
    ReferenceNotFound,
    /// Target id absent, null or unknown to the store
    TargetNotFound,
    /// One of the compared columns is unset on its record
    ColumnUnset,
    Equal,
    Mismatch { reference: Value, target: Value },
}

impl Comparison {
    /// Only a mismatch fails validation.
    pub fn passes(&self) -> bool {
        !matches!(self, Self::Mismatch { .. })
    }
}

/// Checks that a column of the reference record equals a column of the
/// target record.
///
/// The field under validation holds the reference record's primary key. The
/// target record's key is read from the payload, either from the sibling
/// field of the same row (`same_line`) or from a top-level field.
///
/// Existence of either record is deliberately not checked here: a missing
/// record, a missing id, or an unset column all pass. Pair this rule with an
/// existence rule when that matters.
///
/// # Example
///
/// ```rust
/// use equality_validation::core::{EntityType, Payload, Record};
/// use equality_validation::rules::{EqualityRule, FieldContext, Rule};
/// use equality_validation::store::MemoryStore;
/// use serde_json::json;
///
/// let orders = EntityType::new("shop::Order");
/// let invoices = EntityType::new("billing::Invoice");
///
/// let mut store = MemoryStore::new();
/// let order = store.insert(&orders, Record::new().with("currency", "EUR"));
/// let invoice = store.insert(&invoices, Record::new().with("currency", "USD"));
///
/// let rule = EqualityRule::builder()
///     .reference(orders, "currency")
///     .target(invoices, "currency")
///     .target_attribute("lines.*.invoice_id")
///     .store(store)
///     .build()
///     .unwrap();
///
/// let data = Payload::flatten(&json!({
///     "lines": [{ "order_id": order, "invoice_id": invoice }],
/// }));
///
/// let mut failures = Vec::new();
/// rule.validate(&FieldContext::new("lines.0.order_id", &data), &mut |m: String| failures.push(m))
///     .unwrap();
///
/// assert_eq!(
///     failures,
///     vec!["The currency of the selected Order must match the currency of the selected Invoice."]
/// );
/// ```
pub struct EqualityRule {
    pub(crate) reference: EntityType,
    pub(crate) reference_column: String,
    pub(crate) target: EntityType,
    pub(crate) target_column: String,
    pub(crate) target_attribute: String,
    pub(crate) same_line: bool,
    pub(crate) message_key: String,
    pub(crate) store: Arc<dyn RecordStore>,
    pub(crate) labeler: Arc<dyn Labeler>,
}

impl EqualityRule {
    pub fn builder() -> EqualityRuleBuilder {
        EqualityRuleBuilder::new()
    }

    pub fn reference(&self) -> (&EntityType, &str) {
        (&self.reference, &self.reference_column)
    }

    pub fn target(&self) -> (&EntityType, &str) {
        (&self.target, &self.target_column)
    }

    pub fn target_attribute(&self) -> &str {
        &self.target_attribute
    }

    pub fn same_line(&self) -> bool {
        self.same_line
    }

    /// Payload path holding the target id while validating `attribute`.
    ///
    /// ```rust
    /// # use equality_validation::rules::EqualityRule;
    /// # use equality_validation::store::MemoryStore;
    /// let rule = EqualityRule::builder()
    ///     .reference("Order", "code")
    ///     .target("Invoice", "code")
    ///     .target_attribute("items.*.target_id")
    ///     .store(MemoryStore::new())
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(rule.target_lookup_path("items.0.reference_id"), "items.0.target_id");
    /// ```
    pub fn target_lookup_path(&self, attribute: &str) -> String {
        let target_leaf = path::leaf(&self.target_attribute);
        if self.same_line {
            path::replace_leaf(attribute, target_leaf)
        } else {
            target_leaf.to_string()
        }
    }

    /// Resolve both records and compare their columns.
    pub fn compare(&self, ctx: &FieldContext<'_>) -> Result<Comparison, RuleError> {
        let target_path = self.target_lookup_path(ctx.attribute);

        let reference = self.find(&self.reference, ctx.present_value())?;
        let target = self.find(
            &self.target,
            ctx.data.get(&target_path).filter(|id| !id.is_null()),
        )?;

        let Some(reference) = reference else {
            tracing::trace!(attribute = ctx.attribute, "Reference record not found, skipping");
            return Ok(Comparison::ReferenceNotFound);
        };
        let Some(target) = target else {
            tracing::trace!(
                attribute = ctx.attribute,
                target_path = %target_path,
                "Target record not found, skipping"
            );
            return Ok(Comparison::TargetNotFound);
        };

        let (Some(left), Some(right)) = (
            reference.column(&self.reference_column),
            target.column(&self.target_column),
        ) else {
            tracing::trace!(attribute = ctx.attribute, "Compared column unset, skipping");
            return Ok(Comparison::ColumnUnset);
        };

        if left == right {
            Ok(Comparison::Equal)
        } else {
            Ok(Comparison::Mismatch {
                reference: left.clone(),
                target: right.clone(),
            })
        }
    }

    /// Mismatch message with entity names and column labels filled in.
    pub fn message(&self) -> String {
        let template = self.labeler.lookup(&self.message_key).unwrap_or_else(|| {
            tracing::warn!(
                key = %self.message_key,
                "No mismatch message registered, using built-in template"
            );
            DEFAULT_MESSAGE.to_string()
        });

        let reference_column = self.column_label(&self.reference_column);
        let target_column = self.column_label(&self.target_column);

        replace_placeholders(
            &template,
            &[
                ("reference_model", self.reference.display_name()),
                ("reference_column", &reference_column),
                ("target_model", self.target.display_name()),
                ("target_column", &target_column),
            ],
        )
    }

    /// Translated column label, or the raw column name when none exists.
    pub fn column_label(&self, column: &str) -> String {
        self.labeler
            .lookup(&format!("{ATTRIBUTE_LABEL_PREFIX}{column}"))
            .unwrap_or_else(|| column.to_string())
    }

    fn find(&self, entity: &EntityType, id: Option<&Value>) -> Result<Option<Record>, RuleError> {
        match id {
            Some(id) => Ok(self.store.find_by_primary_key(entity, id)?),
            None => Ok(None),
        }
    }
}

impl Rule for EqualityRule {
    fn name(&self) -> &str {
        "equality"
    }

    fn validate(
        &self,
        ctx: &FieldContext<'_>,
        fail: &mut dyn FnMut(String),
    ) -> Result<(), RuleError> {
        if let Comparison::Mismatch { reference, target } = self.compare(ctx)? {
            tracing::debug!(
                attribute = ctx.attribute,
                reference_entity = %self.reference,
                target_entity = %self.target,
                %reference,
                %target,
                "Column values differ"
            );
            fail(self.message());
        }
        Ok(())
    }
}

impl fmt::Debug for EqualityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EqualityRule")
            .field("reference", &self.reference)
            .field("reference_column", &self.reference_column)
            .field("target", &self.target)
            .field("target_column", &self.target_column)
            .field("target_attribute", &self.target_attribute)
            .field("same_line", &self.same_line)
            .field("message_key", &self.message_key)
            .finish_non_exhaustive()
    }
}
