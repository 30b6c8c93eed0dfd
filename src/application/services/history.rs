//! Recent-mappings feed service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// Entries returned when the caller does not ask for a specific limit.
pub const DEFAULT_LIMIT: i64 = 10;

/// Largest limit a caller may request.
const MAX_LIMIT: i64 = 100;

/// Read-only feed of recently created mappings with their current
/// counters.
pub struct HistoryService {
    store: Arc<dyn MappingStore>,
}

impl HistoryService {
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self { store }
    }

    /// Returns up to `limit` mappings, most recently created first.
    ///
    /// Pure, repeatable read; nothing is mutated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when an explicit limit falls
    /// outside `1..=100`, [`AppError::StoreUnavailable`] on store faults.
    pub async fn recent(&self, limit: Option<i64>) -> Result<Vec<Mapping>, AppError> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(AppError::bad_request(
                "limit must be in [1..100]",
                json!({ "field": "limit", "min": 1, "max": MAX_LIMIT }),
            ));
        }

        self.store
            .list_recent(limit)
            .await
            .map_err(AppError::StoreUnavailable)
    }
}
