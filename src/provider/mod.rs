//! Plugin bootstrap: configuration and bundled translations.
//!
//! The provider is what a host application wires in once at startup. It
//! resolves [`EqualityConfig`], registers the bundled message templates under
//! the [`NAMESPACE`] namespace of a [`Translator`], and hands out rule
//! builders preconfigured with the resolved message key.
//!
//! # Example
//!
//! ```rust
//! use equality_validation::provider::EqualityValidationProvider;
//! use equality_validation::translation::Labeler;
//!
//! let provider = EqualityValidationProvider::new();
//! let mut translator = provider.translator();
//! provider.boot(&mut translator).unwrap();
//!
//! assert!(translator
//!     .lookup("equality-validation::validation.custom.line_reference_columns_equality")
//!     .is_some());
//! ```

pub mod config;
pub mod error;

pub use config::EqualityConfig;
pub use error::{ConfigError, ProviderError};

use crate::rules::EqualityRuleBuilder;
use crate::translation::Translator;
use serde_json::Value;
use std::path::Path;

/// Translation namespace owned by this crate.
pub const NAMESPACE: &str = "equality-validation";

/// Language files compiled into the crate: (locale, group, contents).
const BUNDLED_LINES: &[(&str, &str, &str)] = &[
    ("en", "validation", include_str!("../../lang/en/validation.json")),
    ("tr", "validation", include_str!("../../lang/tr/validation.json")),
];

/// Registers configuration and translations for the equality rule
#[derive(Debug, Clone, Default)]
pub struct EqualityValidationProvider {
    config: EqualityConfig,
}

impl EqualityValidationProvider {
    /// Provider with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EqualityConfig) -> Self {
        Self { config }
    }

    /// Resolve configuration, merging an optional JSON file over the defaults
    pub fn register(config_path: Option<&Path>) -> Result<Self, ProviderError> {
        let config = match config_path {
            Some(path) => EqualityConfig::load_from_file(path)?,
            None => EqualityConfig::default(),
        };
        tracing::debug!(
            locale = %config.locale,
            fallback_locale = %config.fallback_locale,
            "Registered equality validation configuration"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &EqualityConfig {
        &self.config
    }

    /// Empty translator set up with the configured locales
    pub fn translator(&self) -> Translator {
        Translator::new(self.config.locale.clone())
            .with_fallback(self.config.fallback_locale.clone())
    }

    /// Load bundled lines, then any override directory from the config.
    ///
    /// Returns the number of language groups registered.
    pub fn boot(&self, translator: &mut Translator) -> Result<usize, ProviderError> {
        let mut loaded = 0;

        for &(locale, group, contents) in BUNDLED_LINES {
            let lines: Value = serde_json::from_str(contents)
                .map_err(|source| ProviderError::BundledLines { locale, source })?;
            translator.add_lines(Some(NAMESPACE), locale, group, lines);
            loaded += 1;
        }

        if let Some(lang_path) = &self.config.lang_path {
            loaded += translator.load_path(Some(NAMESPACE), lang_path)?;
        }

        tracing::debug!(groups = loaded, "Booted equality validation translations");
        Ok(loaded)
    }

    /// Rule builder using the configured message key
    pub fn rule(&self) -> EqualityRuleBuilder {
        EqualityRuleBuilder::new().message_key(self.config.message_key.clone())
    }
}
