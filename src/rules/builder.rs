//! Builder API for the equality rule.

use crate::core::EntityType;
use crate::rules::equality::{EqualityRule, MESSAGE_KEY};
use crate::rules::error::BuildError;
use crate::store::RecordStore;
use crate::translation::{Labeler, NoLabels};
use std::sync::Arc;

/// Builder for [`EqualityRule`].
///
/// `same_line` defaults to `true` and the labeler to [`NoLabels`]; every
/// other part is required.
pub struct EqualityRuleBuilder {
    reference: Option<(EntityType, String)>,
    target: Option<(EntityType, String)>,
    target_attribute: Option<String>,
    same_line: bool,
    message_key: String,
    store: Option<Arc<dyn RecordStore>>,
    labeler: Arc<dyn Labeler>,
}

impl EqualityRuleBuilder {
    pub fn new() -> Self {
        Self {
            reference: None,
            target: None,
            target_attribute: None,
            same_line: true,
            message_key: MESSAGE_KEY.to_string(),
            store: None,
            labeler: Arc::new(NoLabels),
        }
    }

    /// Entity whose id is the value under validation, and its compared column
    pub fn reference(mut self, entity: impl Into<EntityType>, column: impl Into<String>) -> Self {
        self.reference = Some((entity.into(), column.into()));
        self
    }

    /// Entity whose id is read from the payload, and its compared column
    pub fn target(mut self, entity: impl Into<EntityType>, column: impl Into<String>) -> Self {
        self.target = Some((entity.into(), column.into()));
        self
    }

    /// Attribute path holding the target id
    pub fn target_attribute(mut self, path: impl Into<String>) -> Self {
        self.target_attribute = Some(path.into());
        self
    }

    /// Read the target id from the same row (`true`) or from the top level
    pub fn same_line(mut self, same_line: bool) -> Self {
        self.same_line = same_line;
        self
    }

    /// Translation key of the mismatch message
    pub fn message_key(mut self, key: impl Into<String>) -> Self {
        self.message_key = key.into();
        self
    }

    pub fn store(mut self, store: impl RecordStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Share an already type-erased store between several rules
    pub fn shared_store(mut self, store: Arc<dyn RecordStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn labeler(mut self, labeler: impl Labeler + 'static) -> Self {
        self.labeler = Arc::new(labeler);
        self
    }

    pub fn shared_labeler(mut self, labeler: Arc<dyn Labeler>) -> Self {
        self.labeler = labeler;
        self
    }

    /// Build the rule
    pub fn build(self) -> Result<EqualityRule, BuildError> {
        let (reference, reference_column) = self.reference.ok_or(BuildError::MissingReference)?;
        let (target, target_column) = self.target.ok_or(BuildError::MissingTarget)?;
        let target_attribute = self
            .target_attribute
            .ok_or(BuildError::MissingTargetAttribute)?;
        let store = self.store.ok_or(BuildError::MissingStore)?;

        if reference_column.is_empty() {
            return Err(BuildError::EmptyColumn { side: "reference" });
        }
        if target_column.is_empty() {
            return Err(BuildError::EmptyColumn { side: "target" });
        }

        Ok(EqualityRule {
            reference,
            reference_column,
            target,
            target_column,
            target_attribute,
            same_line: self.same_line,
            message_key: self.message_key,
            store,
            labeler: self.labeler,
        })
    }
}

impl Default for EqualityRuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn complete() -> EqualityRuleBuilder {
        EqualityRuleBuilder::new()
            .reference("Order", "code")
            .target("Invoice", "code")
            .target_attribute("invoice_id")
            .store(MemoryStore::new())
    }

    #[test]
    fn defaults_to_same_line() {
        let rule = complete().build().unwrap();

        assert!(rule.same_line());
        assert_eq!(rule.target_attribute(), "invoice_id");
        assert_eq!(rule.reference().1, "code");
        assert_eq!(rule.target().0.identifier(), "Invoice");
    }

    #[test]
    fn same_line_can_be_disabled() {
        let rule = complete().same_line(false).build().unwrap();
        assert!(!rule.same_line());
    }

    #[test]
    fn missing_parts_are_reported() {
        let missing_store = EqualityRuleBuilder::new()
            .reference("Order", "code")
            .target("Invoice", "code")
            .target_attribute("invoice_id")
            .build();
        assert_eq!(missing_store.unwrap_err(), BuildError::MissingStore);

        let missing_reference = EqualityRuleBuilder::new().build();
        assert_eq!(missing_reference.unwrap_err(), BuildError::MissingReference);

        let missing_target = EqualityRuleBuilder::new().reference("Order", "code").build();
        assert_eq!(missing_target.unwrap_err(), BuildError::MissingTarget);

        let missing_attribute = EqualityRuleBuilder::new()
            .reference("Order", "code")
            .target("Invoice", "code")
            .build();
        assert_eq!(missing_attribute.unwrap_err(), BuildError::MissingTargetAttribute);
    }

    #[test]
    fn empty_columns_are_rejected() {
        let result = complete().target("Invoice", "").build();
        assert_eq!(result.unwrap_err(), BuildError::EmptyColumn { side: "target" });
    }

    #[test]
    fn shared_store_is_accepted() {
        let store: Arc<dyn RecordStore> = Arc::new(MemoryStore::new());
        let first = complete().shared_store(Arc::clone(&store)).build();
        let second = complete().shared_store(store).build();

        assert!(first.is_ok());
        assert!(second.is_ok());
    }
}
