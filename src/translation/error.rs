//! Translation catalog error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading translation lines
#[derive(Debug, Error)]
pub enum TranslationError {
    /// A language directory or file could not be read
    #[error("Failed to read translations from '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A language file is not valid JSON
    #[error("Failed to parse translations in '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A language file must hold a JSON object at its root
    #[error("Translation group '{path}' must be a JSON object")]
    NotAnObject { path: PathBuf },
}
