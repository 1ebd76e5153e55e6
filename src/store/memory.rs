//! In-memory record store.

use super::{RecordStore, StoreError};
use crate::core::{EntityType, Record};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<u64, Record>,
    next_key: u64,
}

/// Record store backed by per-entity tables with auto-increment keys.
///
/// Keys start at 1. Lookups accept integer ids and strings holding an
/// integer (`"7"`); any other id never matches. Lookups against an entity
/// type that was never defined fail with [`StoreError::UnknownEntity`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: HashMap<EntityType, Table>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an empty table for `entity`.
    pub fn define(&mut self, entity: &EntityType) {
        self.tables.entry(entity.clone()).or_default();
    }

    /// Insert a record and return its newly assigned key.
    pub fn insert(&mut self, entity: &EntityType, record: Record) -> u64 {
        let table = self.tables.entry(entity.clone()).or_default();
        table.next_key += 1;
        let key = table.next_key;
        table.rows.insert(key, record);
        key
    }

    /// Insert (or replace) a record under an explicit key.
    pub fn insert_with_key(&mut self, entity: &EntityType, key: u64, record: Record) {
        let table = self.tables.entry(entity.clone()).or_default();
        table.next_key = table.next_key.max(key);
        table.rows.insert(key, record);
    }

    /// Number of records stored for `entity`.
    pub fn len(&self, entity: &EntityType) -> usize {
        self.tables.get(entity).map_or(0, |table| table.rows.len())
    }

    pub fn is_empty(&self) -> bool {
        self.tables.values().all(|table| table.rows.is_empty())
    }
}

fn primary_key(id: &Value) -> Option<u64> {
    match id {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

impl RecordStore for MemoryStore {
    fn find_by_primary_key(
        &self,
        entity: &EntityType,
        id: &Value,
    ) -> Result<Option<Record>, StoreError> {
        let table = self
            .tables
            .get(entity)
            .ok_or_else(|| StoreError::UnknownEntity(entity.identifier().to_string()))?;

        Ok(primary_key(id).and_then(|key| table.rows.get(&key).cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn orders() -> EntityType {
        EntityType::new("shop::Order")
    }

    #[test]
    fn insert_assigns_increasing_keys() {
        let mut store = MemoryStore::new();
        let first = store.insert(&orders(), Record::new().with("code", "A"));
        let second = store.insert(&orders(), Record::new().with("code", "B"));

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(store.len(&orders()), 2);
    }

    #[test]
    fn lookup_accepts_numeric_strings() {
        let mut store = MemoryStore::new();
        let key = store.insert(&orders(), Record::new().with("code", "A"));

        let by_number = store.find_by_primary_key(&orders(), &json!(key)).unwrap();
        let by_string = store.find_by_primary_key(&orders(), &json!("1")).unwrap();

        assert_eq!(by_number, by_string);
        assert!(by_number.is_some());
    }

    #[test]
    fn unmatched_ids_are_not_found() {
        let mut store = MemoryStore::new();
        store.insert(&orders(), Record::new());

        for id in [json!(99), json!("abc"), json!(null), json!(-1), json!(1.5), json!([1])] {
            assert_eq!(store.find_by_primary_key(&orders(), &id).unwrap(), None);
        }
    }

    #[test]
    fn undefined_entity_is_an_error() {
        let store = MemoryStore::new();
        let result = store.find_by_primary_key(&orders(), &json!(1));

        assert_eq!(result, Err(StoreError::UnknownEntity("shop::Order".to_string())));
    }

    #[test]
    fn defined_empty_table_finds_nothing() {
        let mut store = MemoryStore::new();
        store.define(&orders());

        assert!(store.is_empty());
        assert_eq!(store.find_by_primary_key(&orders(), &json!(1)).unwrap(), None);
    }

    #[test]
    fn explicit_keys_advance_the_counter() {
        let mut store = MemoryStore::new();
        store.insert_with_key(&orders(), 10, Record::new());
        let next = store.insert(&orders(), Record::new());

        assert_eq!(next, 11);
    }
}
