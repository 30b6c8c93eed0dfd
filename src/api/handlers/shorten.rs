//! Handler for the shorten endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a destination URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "destination": "https://example.com/some/long/path" }
/// ```
///
/// An optional `origin_tag` attributes the submission; it defaults to
/// `anonymous`.
///
/// # Response
///
/// `201 Created` with the allocated code and the displayable short URL:
///
/// ```json
/// {
///   "code": "fR7x2kQp",
///   "short_url": "https://sho.rt/fR7x2kQp",
///   "destination": "https://example.com/some/long/path"
/// }
/// ```
///
/// # Errors
///
/// - `400`: the destination is not an absolute http/https URL.
/// - `503`: code allocation exhausted its retry budget, or the store is
///   unavailable. Both are retryable.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let mapping = state
        .allocator
        .allocate(&payload.destination, &payload.origin_tag)
        .await?;

    let short_url = state.short_url(&mapping.code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            code: mapping.code,
            short_url,
            destination: mapping.destination,
        }),
    ))
}
