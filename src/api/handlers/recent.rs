//! Handler for the recent-mappings feed.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::recent::{MappingSummary, RecentQuery, RecentResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists recently created mappings with their current click counters.
///
/// # Endpoint
///
/// `GET /api/recent?limit=N`
///
/// Entries come back most recently created first. `limit` defaults to 10
/// and must be in `[1..100]`. The read is side-effect free: counters are
/// reported, never touched.
pub async fn recent_handler(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Result<Json<RecentResponse>, AppError> {
    let mappings = state.history.recent(query.limit).await?;

    Ok(Json(RecentResponse {
        items: mappings.into_iter().map(MappingSummary::from).collect(),
    }))
}
