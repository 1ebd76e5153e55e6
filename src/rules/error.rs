//! Build errors for rule builders.

use thiserror::Error;

/// Errors that can occur when building an equality rule.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BuildError {
    #[error("Reference entity not specified. Call .reference(entity, column)")]
    MissingReference,

    #[error("Target entity not specified. Call .target(entity, column)")]
    MissingTarget,

    #[error("Target attribute not specified. Call .target_attribute(path)")]
    MissingTargetAttribute,

    #[error("Record store not specified. Call .store(store)")]
    MissingStore,

    #[error("Column name for {side} entity must not be empty")]
    EmptyColumn { side: &'static str },
}
