//! Entity type identifiers and fetched records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Runtime identifier of a record type, e.g. `App\Models\Invoice` or
/// `billing::Invoice`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityType(String);

impl EntityType {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    /// Fully-qualified identifier as supplied.
    pub fn identifier(&self) -> &str {
        &self.0
    }

    /// Type name with any namespace or module prefix stripped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use equality_validation::core::EntityType;
    ///
    /// assert_eq!(EntityType::new("App\\Models\\Invoice").display_name(), "Invoice");
    /// assert_eq!(EntityType::new("billing::Invoice").display_name(), "Invoice");
    /// assert_eq!(EntityType::new("Invoice").display_name(), "Invoice");
    /// ```
    pub fn display_name(&self) -> &str {
        let start = ["\\", "/", "::"]
            .into_iter()
            .filter_map(|sep| self.0.rfind(sep).map(|index| index + sep.len()))
            .max()
            .unwrap_or(0);
        &self.0[start..]
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityType {
    fn from(identifier: &str) -> Self {
        Self::new(identifier)
    }
}

impl From<String> for EntityType {
    fn from(identifier: String) -> Self {
        Self(identifier)
    }
}

/// A record fetched from a [`RecordStore`](crate::store::RecordStore).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    columns: Map<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style column assignment.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(column, value);
        self
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.insert(column.into(), value.into());
    }

    /// Value of a column that is set.
    ///
    /// Missing columns and null columns are both unset and yield `None`.
    pub fn column(&self, name: &str) -> Option<&Value> {
        self.columns.get(name).filter(|value| !value.is_null())
    }

    /// Raw column map, including null columns.
    pub fn columns(&self) -> &Map<String, Value> {
        &self.columns
    }
}

impl From<Map<String, Value>> for Record {
    fn from(columns: Map<String, Value>) -> Self {
        Self { columns }
    }
}

impl TryFrom<Value> for Record {
    type Error = Value;

    /// Only JSON objects convert; anything else is handed back.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(columns) => Ok(Self { columns }),
            other => Err(other),
        }
    }
}
