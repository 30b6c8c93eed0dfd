//! PostgreSQL implementation of the mapping store.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::{InsertOutcome, MappingStore, StoreError};

/// PostgreSQL store for mappings.
///
/// Uniqueness comes from the primary key on `code`; the insert and the
/// increment are single statements, so concurrent callers are serialized
/// by the database and no application-side locking exists.
pub struct PgMappingStore {
    pool: Arc<PgPool>,
}

impl PgMappingStore {
    /// Creates a new store over a connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingStore for PgMappingStore {
    async fn insert_if_absent(&self, new_mapping: NewMapping) -> Result<InsertOutcome, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO mappings (code, destination, origin_tag)
            VALUES ($1, $2, $3)
            ON CONFLICT (code) DO NOTHING
            RETURNING code, destination, origin_tag, clicks, created_at
            "#,
        )
        .bind(&new_mapping.code)
        .bind(&new_mapping.destination)
        .bind(&new_mapping.origin_tag)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_store_error)?;

        match row {
            Some(row) => Ok(InsertOutcome::Inserted(mapping_from_row(&row)?)),
            None => Ok(InsertOutcome::DuplicateCode),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT code, destination, origin_tag, clicks, created_at
            FROM mappings
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_store_error)?;

        row.as_ref().map(mapping_from_row).transpose()
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE mappings SET clicks = clicks + 1 WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_store_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Query(format!(
                "increment on unknown code {code}"
            )));
        }

        Ok(())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Mapping>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT code, destination, origin_tag, clicks, created_at
            FROM mappings
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_store_error)?;

        rows.iter().map(mapping_from_row).collect()
    }
}

fn mapping_from_row(row: &PgRow) -> Result<Mapping, StoreError> {
    Ok(Mapping {
        code: row.try_get("code").map_err(map_store_error)?,
        destination: row.try_get("destination").map_err(map_store_error)?,
        origin_tag: row.try_get("origin_tag").map_err(map_store_error)?,
        clicks: row.try_get("clicks").map_err(map_store_error)?,
        created_at: row.try_get("created_at").map_err(map_store_error)?,
    })
}

fn map_store_error(e: sqlx::Error) -> StoreError {
    match &e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StoreError::Unavailable(e.to_string())
        }
        _ => StoreError::Query(e.to_string()),
    }
}
