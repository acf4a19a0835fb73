//! Mock content store for testing.
//!
//! Provides [`MockStore`] for unit testing without network access.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, RwLock};

use crate::filter::Filter;
use crate::record::Record;
use crate::store::{ContentStore, ErrorStatus, StoreError, StoreErrorKind};

/// Mock content store for testing.
///
/// Stores records in memory, evaluates filters locally, and records every
/// request so tests can assert on request counts and filter shape.
///
/// # Example
///
/// ```ignore
/// use lakeshore_store::{ContentStore, Filter, MockStore, PropertyValue, Record};
///
/// let store = MockStore::new().with_record(
///     "db-cats",
///     Record::new("cat-1").with_property("Published", PropertyValue::checkbox(true)),
/// );
///
/// let records = store.query("db-cats", &Filter::checkbox("Published", true)).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(store.retrieve_count("cat-1"), 0);
/// ```
#[derive(Debug, Default)]
pub struct MockStore {
    collections: RwLock<HashMap<String, Vec<Record>>>,
    records: RwLock<HashMap<String, Record>>,
    failing_collections: RwLock<HashSet<String>>,
    failing_records: RwLock<HashSet<String>>,
    queries: Mutex<Vec<(String, Filter)>>,
    retrieves: Mutex<HashMap<String, usize>>,
}

impl MockStore {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to a collection. The record is also retrievable by id.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_record(self, collection_id: impl Into<String>, record: Record) -> Self {
        self.records
            .write()
            .unwrap()
            .insert(record.id.clone(), record.clone());
        self.collections
            .write()
            .unwrap()
            .entry(collection_id.into())
            .or_default()
            .push(record);
        self
    }

    /// Make a record retrievable by id without adding it to any collection.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_retrievable(self, record: Record) -> Self {
        self.records
            .write()
            .unwrap()
            .insert(record.id.clone(), record);
        self
    }

    /// Make every query against a collection fail as unavailable.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failing_collection(self, collection_id: impl Into<String>) -> Self {
        self.failing_collections
            .write()
            .unwrap()
            .insert(collection_id.into());
        self
    }

    /// Make retrieval of a record id fail as unavailable.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failing_record(self, record_id: impl Into<String>) -> Self {
        self.failing_records
            .write()
            .unwrap()
            .insert(record_id.into());
        self
    }

    /// Queries issued so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn queries(&self) -> Vec<(String, Filter)> {
        self.queries.lock().unwrap().clone()
    }

    /// Number of `retrieve` calls for a record id.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn retrieve_count(&self, record_id: &str) -> usize {
        self.retrieves
            .lock()
            .unwrap()
            .get(record_id)
            .copied()
            .unwrap_or(0)
    }

    /// Total number of `retrieve` calls.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn total_retrieves(&self) -> usize {
        self.retrieves.lock().unwrap().values().sum()
    }

    fn unavailable(target: &str) -> StoreError {
        StoreError::new(StoreErrorKind::Unavailable)
            .with_status(ErrorStatus::Persistent)
            .with_target(target)
            .with_backend("Mock")
    }
}

impl ContentStore for MockStore {
    fn query(&self, collection_id: &str, filter: &Filter) -> Result<Vec<Record>, StoreError> {
        self.queries
            .lock()
            .unwrap()
            .push((collection_id.to_owned(), filter.clone()));

        if self.failing_collections.read().unwrap().contains(collection_id) {
            return Err(Self::unavailable(collection_id));
        }

        let collections = self.collections.read().unwrap();
        let records = collections.get(collection_id).ok_or_else(|| {
            StoreError::not_found(collection_id).with_backend("Mock")
        })?;

        Ok(records
            .iter()
            .filter(|r| filter.matches(&r.properties))
            .cloned()
            .collect())
    }

    fn retrieve(&self, record_id: &str) -> Result<Record, StoreError> {
        *self
            .retrieves
            .lock()
            .unwrap()
            .entry(record_id.to_owned())
            .or_insert(0) += 1;

        if self.failing_records.read().unwrap().contains(record_id) {
            return Err(Self::unavailable(record_id));
        }

        self.records
            .read()
            .unwrap()
            .get(record_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(record_id).with_backend("Mock"))
    }
}
