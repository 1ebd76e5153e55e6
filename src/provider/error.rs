//! Provider and configuration error types.

use crate::translation::TranslationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration is not valid JSON for this crate
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration parsed but holds unusable values
    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

/// Errors that can occur while registering or booting the provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Translation(#[from] TranslationError),

    /// A bundled language file is corrupt
    #[error("Bundled translations for locale '{locale}' are invalid: {source}")]
    BundledLines {
        locale: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
