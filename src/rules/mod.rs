//! Field rules and the cross-record equality rule.
//!
//! A [`Rule`] is invoked once per concrete attribute. It reports failures
//! through the `fail` callback and returns `Err` only when it cannot do its
//! job at all (for instance the record store is down).
//!
//! # Example
//!
//! ```rust
//! use equality_validation::core::Payload;
//! use equality_validation::rules::{FieldContext, FnRule, Rule};
//! use serde_json::json;
//!
//! let rule = FnRule::new("positive", |ctx: &FieldContext<'_>| {
//!     match ctx.value.and_then(|v| v.as_i64()) {
//!         Some(n) if n > 0 => None,
//!         _ => Some(format!("The {} must be positive.", ctx.attribute)),
//!     }
//! });
//!
//! let data = Payload::flatten(&json!({ "quantity": 0 }));
//! let result = rule.check(&FieldContext::new("quantity", &data)).unwrap();
//! assert!(result.is_failure());
//! ```

pub mod builder;
pub mod context;
pub mod equality;
pub mod error;
pub mod violations;

pub use builder::EqualityRuleBuilder;
pub use context::FieldContext;
pub use equality::{Comparison, EqualityRule};
pub use error::BuildError;
pub use violations::{RuleError, Violation};

use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A validation rule applied to one attribute at a time.
pub trait Rule: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Validate one attribute, calling `fail` once per failure message.
    fn validate(
        &self,
        ctx: &FieldContext<'_>,
        fail: &mut dyn FnMut(String),
    ) -> Result<(), RuleError>;

    /// Validate one attribute, accumulating every failure as a [`Violation`].
    fn check(
        &self,
        ctx: &FieldContext<'_>,
    ) -> Result<Validation<(), NonEmptyVec<Violation>>, RuleError> {
        let mut messages = Vec::new();
        self.validate(ctx, &mut |message: String| messages.push(message))?;

        let checks: Vec<Validation<(), NonEmptyVec<Violation>>> = messages
            .into_iter()
            .map(|message| Validation::fail(Violation::new(ctx.attribute, message)))
            .collect();

        Ok(Validation::all_vec(checks).map(|_| ()))
    }
}

/// Type alias for closure-backed checks
pub type FieldCheck = Box<dyn Fn(&FieldContext<'_>) -> Option<String> + Send + Sync>;

/// Rule backed by a closure returning a failure message.
pub struct FnRule {
    name: String,
    check: FieldCheck,
}

impl FnRule {
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&FieldContext<'_>) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Box::new(check),
        }
    }
}

impl Rule for FnRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(
        &self,
        ctx: &FieldContext<'_>,
        fail: &mut dyn FnMut(String),
    ) -> Result<(), RuleError> {
        if let Some(message) = (self.check)(ctx) {
            fail(message);
        }
        Ok(())
    }
}
