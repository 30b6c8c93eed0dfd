//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_origin_tag() -> String {
    "anonymous".to_string()
}

/// Request to shorten a single destination URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The destination to shorten (must be an absolute http/https URL).
    #[validate(url(message = "Invalid destination URL"))]
    pub destination: String,

    /// Attribution marker recorded with the mapping. Defaults to
    /// `anonymous` when the submitter does not identify itself.
    #[serde(default = "default_origin_tag")]
    #[validate(length(min = 1, max = 64))]
    pub origin_tag: String,
}

/// Response carrying the freshly allocated short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub destination: String,
}
