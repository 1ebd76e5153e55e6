//! Human-readable labels and message templates.
//!
//! Rules only see the [`Labeler`] capability: "give me the line stored under
//! this key, if any". Falling back to something sensible when a line is
//! missing is the caller's job, so no sentinel values travel through here.
//!
//! [`Translator`] is the bundled catalog. Lines are grouped per locale in
//! JSON documents and addressed with dot keys:
//!
//! - `validation.attributes.code` reads `attributes.code` from the
//!   `validation` group
//! - `equality-validation::validation.custom.line_reference_columns_equality`
//!   reads from the `validation` group registered under the
//!   `equality-validation` namespace
//!
//! # Example
//!
//! ```rust
//! use equality_validation::translation::{Labeler, Translator};
//! use serde_json::json;
//!
//! let mut translator = Translator::new("en");
//! translator.add_lines(None, "en", "validation", json!({
//!     "attributes": { "currency": "currency code" },
//! }));
//!
//! assert_eq!(
//!     translator.lookup("validation.attributes.currency").as_deref(),
//!     Some("currency code")
//! );
//! assert_eq!(translator.lookup("validation.attributes.status"), None);
//! ```

pub mod error;
mod replace;

pub use error::TranslationError;
pub use replace::replace_placeholders;

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Namespace separator in translation keys.
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Lookup of a translated line by key.
pub trait Labeler: Send + Sync {
    /// Line stored under `key`, or `None` when nothing is registered.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Labeler that knows no lines at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLabels;

impl Labeler for NoLabels {
    fn lookup(&self, _key: &str) -> Option<String> {
        None
    }
}

impl Labeler for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: Labeler + ?Sized> Labeler for Arc<T> {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct GroupKey {
    namespace: Option<String>,
    locale: String,
    group: String,
}

/// Locale-aware catalog of translation lines.
#[derive(Clone, Debug)]
pub struct Translator {
    locale: String,
    fallback_locale: String,
    groups: HashMap<GroupKey, Value>,
}

impl Translator {
    /// Create an empty catalog whose fallback locale equals `locale`.
    pub fn new(locale: impl Into<String>) -> Self {
        let locale = locale.into();
        Self {
            fallback_locale: locale.clone(),
            locale,
            groups: HashMap::new(),
        }
    }

    pub fn with_fallback(mut self, fallback_locale: impl Into<String>) -> Self {
        self.fallback_locale = fallback_locale.into();
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// Merge `lines` into a group.
    ///
    /// Objects are merged recursively; on conflict the newly added line
    /// wins, which is how applications override vendor lines.
    pub fn add_lines(&mut self, namespace: Option<&str>, locale: &str, group: &str, lines: Value) {
        let key = GroupKey {
            namespace: namespace.map(str::to_string),
            locale: locale.to_string(),
            group: group.to_string(),
        };
        let slot = self
            .groups
            .entry(key)
            .or_insert_with(|| Value::Object(Map::new()));
        merge(slot, lines);
    }

    /// Load every `<dir>/<locale>/<group>.json` file.
    ///
    /// Returns the number of group files loaded. Non-JSON files are ignored.
    pub fn load_path(
        &mut self,
        namespace: Option<&str>,
        dir: impl AsRef<Path>,
    ) -> Result<usize, TranslationError> {
        let dir = dir.as_ref();
        let mut loaded = 0;

        for locale_entry in read_dir(dir)? {
            let locale_path = locale_entry.path();
            if !locale_path.is_dir() {
                continue;
            }
            let Some(locale) = locale_path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let locale = locale.to_string();

            for group_entry in read_dir(&locale_path)? {
                let group_path = group_entry.path();
                if group_path.extension().and_then(|e| e.to_str()) != Some("json") {
                    continue;
                }
                let Some(group) = group_path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                let group = group.to_string();

                let lines = read_group(&group_path)?;
                self.add_lines(namespace, &locale, &group, lines);
                loaded += 1;
                tracing::debug!(
                    namespace = namespace.unwrap_or("*"),
                    locale = %locale,
                    group = %group,
                    "Loaded translation group from {}",
                    group_path.display()
                );
            }
        }

        Ok(loaded)
    }

    /// Whether a string line exists for `key` in the current or fallback locale.
    pub fn has(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Translated line with placeholders replaced; echoes `key` back when missing.
    pub fn get(&self, key: &str, replacements: &[(&str, &str)]) -> String {
        match self.lookup(key) {
            Some(line) => replace_placeholders(&line, replacements),
            None => key.to_string(),
        }
    }

    fn line_in(&self, locale: &str, key: &str) -> Option<String> {
        let (namespace, rest) = match key.split_once(NAMESPACE_SEPARATOR) {
            Some((namespace, rest)) => (Some(namespace.to_string()), rest),
            None => (None, key),
        };
        let (group, item) = match rest.split_once('.') {
            Some((group, item)) => (group, Some(item)),
            None => (rest, None),
        };

        let root = self.groups.get(&GroupKey {
            namespace,
            locale: locale.to_string(),
            group: group.to_string(),
        })?;

        let mut node = root;
        if let Some(item) = item {
            for segment in item.split('.') {
                node = node.as_object()?.get(segment)?;
            }
        }
        node.as_str().map(str::to_string)
    }
}

impl Labeler for Translator {
    fn lookup(&self, key: &str) -> Option<String> {
        self.line_in(&self.locale, key).or_else(|| {
            if self.fallback_locale == self.locale {
                None
            } else {
                self.line_in(&self.fallback_locale, key)
            }
        })
    }
}

fn read_dir(dir: &Path) -> Result<Vec<fs::DirEntry>, TranslationError> {
    let read_error = |source| TranslationError::Read {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = fs::read_dir(dir)
        .map_err(read_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_error)?;
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}

fn read_group(path: &Path) -> Result<Value, TranslationError> {
    let contents = fs::read_to_string(path).map_err(|source| TranslationError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let lines: Value = serde_json::from_str(&contents).map_err(|source| TranslationError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if !lines.is_object() {
        return Err(TranslationError::NotAnObject {
            path: path.to_path_buf(),
        });
    }
    Ok(lines)
}

fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
