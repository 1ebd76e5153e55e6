//! Violations and rule errors.

use crate::store::StoreError;
use serde::Serialize;
use thiserror::Error;

/// A failed check on one concrete attribute
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[error("{attribute}: {message}")]
pub struct Violation {
    pub attribute: String,
    pub message: String,
}

impl Violation {
    pub fn new(attribute: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            message: message.into(),
        }
    }
}

/// Errors that abort validation instead of reporting a violation
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RuleError {
    #[error("Record lookup failed: {0}")]
    Store(#[from] StoreError),

    #[error("Rule '{rule}' failed: {message}")]
    Custom { rule: String, message: String },
}
