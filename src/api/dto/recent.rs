//! DTOs for the recent-mappings feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Mapping;

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct RecentResponse {
    pub items: Vec<MappingSummary>,
}

/// One feed entry: the mapping with its current counter.
#[derive(Debug, Serialize)]
pub struct MappingSummary {
    pub code: String,
    pub destination: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl From<Mapping> for MappingSummary {
    fn from(mapping: Mapping) -> Self {
        Self {
            code: mapping.code,
            destination: mapping.destination,
            created_at: mapping.created_at,
            clicks: mapping.clicks,
        }
    }
}
