//! Destination URL well-formedness check.

use serde_json::json;
use url::Url;

use crate::error::AppError;

/// Validates `raw` as an absolute http/https URL and returns the trimmed
/// original string.
///
/// The destination is stored and later returned exactly as submitted
/// (minus surrounding whitespace); no normalization is applied.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the input is empty, does not
/// parse as an absolute URL, uses a scheme other than http/https, or has
/// no host.
pub fn validate_destination(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(AppError::bad_request(
            "Destination must not be empty",
            json!({ "field": "destination" }),
        ));
    }

    let parsed = Url::parse(trimmed).map_err(|e| {
        AppError::bad_request(
            "Invalid destination URL",
            json!({ "field": "destination", "reason": e.to_string() }),
        )
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::bad_request(
                "Only http and https destinations are allowed",
                json!({ "field": "destination", "scheme": other }),
            ));
        }
    }

    if parsed.host_str().is_none() {
        return Err(AppError::bad_request(
            "Destination must include a host",
            json!({ "field": "destination" }),
        ));
    }

    Ok(trimmed.to_string())
}
