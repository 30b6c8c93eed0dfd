//! Application error taxonomy and its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::domain::repositories::StoreError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Every failure the core can surface to a caller.
///
/// `Validation` and `NotFound` are expected, user-visible outcomes.
/// `AllocationExhausted` and `StoreUnavailable` are retryable conditions.
/// `IncrementFailed` means the lookup succeeded but the counter write did
/// not; it is kept distinct from `NotFound` so a valid code is never
/// reported as nonexistent because of an infrastructure fault.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("no unique short code available after {attempts} attempts")]
    AllocationExhausted { attempts: u32 },
    #[error("click counter update failed")]
    IncrementFailed(#[source] StoreError),
    #[error("storage backend unavailable")]
    StoreUnavailable(#[source] StoreError),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation {
            message: "Request validation failed".to_string(),
            details: serde_json::to_value(&errors).unwrap_or_default(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::AllocationExhausted { attempts } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "allocation_exhausted",
                "Could not allocate a unique short code".to_string(),
                json!({ "attempts": attempts, "retryable": true }),
            ),
            AppError::IncrementFailed(source) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "increment_failed",
                "Click counter update failed".to_string(),
                json!({ "cause": source.to_string() }),
            ),
            AppError::StoreUnavailable(source) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "store_unavailable",
                "Storage backend unavailable".to_string(),
                json!({ "cause": source.to_string(), "retryable": true }),
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let response = AppError::bad_request("bad", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::not_found("missing", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_allocation_exhausted_maps_to_503() {
        let response = AppError::AllocationExhausted { attempts: 5 }.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_increment_failed_maps_to_500() {
        let err = AppError::IncrementFailed(StoreError::Query("boom".to_string()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_unavailable_maps_to_503() {
        let err = AppError::StoreUnavailable(StoreError::Unavailable("pool timed out".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_store_fault_is_not_not_found() {
        let err = AppError::StoreUnavailable(StoreError::Unavailable("down".to_string()));
        assert_ne!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
