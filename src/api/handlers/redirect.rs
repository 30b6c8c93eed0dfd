//! Handler for short-link redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The click counter is incremented before the redirect is issued, so a
/// returned `307 Temporary Redirect` always means the click was counted.
///
/// # Errors
///
/// - `404`: the code has no mapping.
/// - `500`: the mapping exists but the counter update failed.
/// - `503`: the store could not be reached. Deliberately not a 404, the
///   code may well exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let destination = state.resolver.resolve(&code).await?;

    Ok(Redirect::temporary(&destination))
}
