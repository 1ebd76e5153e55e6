//! Record lookup capability.
//!
//! Rules never resolve entity types by name themselves. They are handed a
//! [`RecordStore`] and ask it for a record by primary key.

pub mod error;
mod memory;

pub use error::StoreError;
pub use memory::MemoryStore;

use crate::core::{EntityType, Record};
use serde_json::Value;

/// Lookup of records by primary key.
///
/// `Ok(None)` means "not found" and is a normal outcome. `Err` is reserved
/// for failures of the store itself.
///
/// # Example
///
/// ```rust
/// use equality_validation::core::{EntityType, Record};
/// use equality_validation::store::{MemoryStore, RecordStore};
/// use serde_json::json;
///
/// let invoices = EntityType::new("billing::Invoice");
/// let mut store = MemoryStore::new();
/// let id = store.insert(&invoices, Record::new().with("currency", "EUR"));
///
/// let found = store.find_by_primary_key(&invoices, &json!(id)).unwrap();
/// assert_eq!(found.unwrap().column("currency"), Some(&json!("EUR")));
/// ```
pub trait RecordStore: Send + Sync {
    fn find_by_primary_key(
        &self,
        entity: &EntityType,
        id: &Value,
    ) -> Result<Option<Record>, StoreError>;
}

impl<T: RecordStore + ?Sized> RecordStore for std::sync::Arc<T> {
    fn find_by_primary_key(
        &self,
        entity: &EntityType,
        id: &Value,
    ) -> Result<Option<Record>, StoreError> {
        (**self).find_by_primary_key(entity, id)
    }
}
