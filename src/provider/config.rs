//! Provider configuration.

use super::error::ConfigError;
use crate::rules::equality::MESSAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings read by [`EqualityValidationProvider`](super::EqualityValidationProvider).
///
/// Every field has a default, so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EqualityConfig {
    /// Locale used for messages and column labels
    pub locale: String,
    /// Locale consulted when a line is missing in `locale`
    pub fallback_locale: String,
    /// Translation key of the mismatch message
    pub message_key: String,
    /// Directory of `<locale>/<group>.json` files overriding bundled lines
    pub lang_path: Option<PathBuf>,
}

impl Default for EqualityConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            fallback_locale: "en".to_string(),
            message_key: MESSAGE_KEY.to_string(),
            lang_path: None,
        }
    }
}

impl EqualityConfig {
    /// Load configuration from a JSON file, filling gaps with defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Self::load_from_str(&contents)
    }

    /// Load configuration from string content
    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.locale.trim().is_empty() {
            return Err(ConfigError::Invalid {
                message: "locale must not be empty".to_string(),
            });
        }
        if self.fallback_locale.trim().is_empty() {
            return Err(ConfigError::Invalid {
                message: "fallback_locale must not be empty".to_string(),
            });
        }
        if self.message_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                message: "message_key must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_config_matches_defaults() {
        let shipped = include_str!("../../config/equality-validation.json");
        assert_eq!(EqualityConfig::load_from_str(shipped).unwrap(), EqualityConfig::default());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = EqualityConfig::load_from_str(r#"{ "locale": "tr" }"#).unwrap();

        assert_eq!(config.locale, "tr");
        assert_eq!(config.fallback_locale, "en");
        assert_eq!(config.message_key, MESSAGE_KEY);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = EqualityConfig::load_from_str(r#"{ "locales": "tr" }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn empty_values_are_invalid() {
        let result = EqualityConfig::load_from_str(r#"{ "message_key": " " }"#);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn missing_file_is_reported() {
        let result = EqualityConfig::load_from_file("/no/such/equality-validation.json");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("equality-validation.json");
        fs::write(&path, r#"{ "fallback_locale": "tr", "lang_path": "lang" }"#).unwrap();

        let config = EqualityConfig::load_from_file(&path).unwrap();
        assert_eq!(config.fallback_locale, "tr");
        assert_eq!(config.lang_path, Some(PathBuf::from("lang")));
    }
}
