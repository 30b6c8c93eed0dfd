//! In-memory implementation of the mapping store.
//!
//! Holds everything in a `RwLock`-guarded map with no persistence across
//! restarts. Used by the HTTP test suite and for running the service
//! without a database.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::{InsertOutcome, MappingStore, StoreError};

#[derive(Default)]
struct Inner {
    mappings: HashMap<String, Mapping>,
    // Creation order, oldest first. Timestamps from `Utc::now()` can tie
    // within a millisecond; this keeps the recency feed deterministic.
    order: Vec<String>,
}

/// In-memory mapping store.
///
/// Mutations take the write lock for the duration of the map update only,
/// so the uniqueness and lost-update guarantees of the storage contract
/// hold here exactly as they do in PostgreSQL.
#[derive(Default)]
pub struct MemoryMappingStore {
    inner: RwLock<Inner>,
}

impl MemoryMappingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mappings currently stored.
    pub async fn len(&self) -> usize {
        self.inner.read().await.mappings.len()
    }

    /// True when no mapping has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.mappings.is_empty()
    }
}

#[async_trait]
impl MappingStore for MemoryMappingStore {
    async fn insert_if_absent(&self, new_mapping: NewMapping) -> Result<InsertOutcome, StoreError> {
        let mut guard = self.inner.write().await;

        if guard.mappings.contains_key(&new_mapping.code) {
            return Ok(InsertOutcome::DuplicateCode);
        }

        let mapping = Mapping::new(
            new_mapping.code.clone(),
            new_mapping.destination,
            new_mapping.origin_tag,
            0,
            Utc::now(),
        );

        guard.order.push(new_mapping.code.clone());
        guard.mappings.insert(new_mapping.code, mapping.clone());

        Ok(InsertOutcome::Inserted(mapping))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, StoreError> {
        let guard = self.inner.read().await;
        Ok(guard.mappings.get(code).cloned())
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), StoreError> {
        let mut guard = self.inner.write().await;

        match guard.mappings.get_mut(code) {
            Some(mapping) => {
                mapping.clicks += 1;
                Ok(())
            }
            None => Err(StoreError::Query(format!(
                "increment on unknown code {code}"
            ))),
        }
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Mapping>, StoreError> {
        let guard = self.inner.read().await;

        Ok(guard
            .order
            .iter()
            .rev()
            .take(limit.max(0) as usize)
            .filter_map(|code| guard.mappings.get(code).cloned())
            .collect())
    }
}
