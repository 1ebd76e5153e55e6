//! Record store error types.

use thiserror::Error;

/// Errors raised by a record store lookup.
///
/// The equality rule never swallows these: a lookup against a misconfigured
/// entity type is a configuration bug and surfaces to the caller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    /// The entity type is not known to the store
    #[error("Unknown entity type '{0}'")]
    UnknownEntity(String),

    /// The backing datastore could not serve the lookup
    #[error("Record store unavailable: {0}")]
    Unavailable(String),
}
