//! Storage trait for short-code mappings.

use crate::domain::entities::{Mapping, NewMapping};
use async_trait::async_trait;
use thiserror::Error;

/// Infrastructure fault reported by a [`MappingStore`] implementation.
///
/// `Unavailable` covers the store being unreachable (pool timeout, closed
/// pool, connection loss); `Query` covers a statement that the store
/// rejected or failed to execute. Neither is ever collapsed into a
/// "mapping does not exist" answer; absence is expressed through
/// `Ok(None)` / [`InsertOutcome::DuplicateCode`], not through errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unreachable: {0}")]
    Unavailable(String),
    #[error("store query failed: {0}")]
    Query(String),
}

/// Result of an insert-if-absent attempt.
#[derive(Debug)]
pub enum InsertOutcome {
    /// The mapping was written; carries the stored row so the caller can
    /// return it without a re-read.
    Inserted(Mapping),
    /// The candidate code already exists. Nothing was written.
    DuplicateCode,
}

/// Storage interface for mappings.
///
/// Implementations must enforce code uniqueness on insert and serialize
/// click increments per row, so callers never need locks of their own.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingStore`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryMappingStore`] - in-memory,
///   for tests and database-free runs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Writes a new mapping unless its code is already taken.
    ///
    /// The existence check and the write are a single atomic store
    /// operation; two concurrent inserts of the same code resolve to one
    /// [`InsertOutcome::Inserted`] and one [`InsertOutcome::DuplicateCode`].
    async fn insert_if_absent(&self, new_mapping: NewMapping) -> Result<InsertOutcome, StoreError>;

    /// Looks up a mapping by its code.
    ///
    /// Returns `Ok(None)` when the code has no mapping; errors are
    /// reserved for store faults.
    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, StoreError>;

    /// Atomically adds 1 to the click counter of `code`.
    ///
    /// Concurrent increments on the same code must all land (no lost
    /// updates). A nonexistent code is a [`StoreError::Query`], never a
    /// silent success.
    async fn increment_clicks(&self, code: &str) -> Result<(), StoreError>;

    /// Returns up to `limit` mappings, most recently created first.
    ///
    /// Pure read; repeated calls without intervening writes return the
    /// same sequence.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Mapping>, StoreError>;
}
