//! Short-code resolution service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::MappingStore;
use crate::error::AppError;
use crate::utils::code_generator::is_well_formed_code;

/// Service that resolves a short code to its destination and counts the
/// click.
///
/// Resolution is read-mostly and safe under arbitrary concurrency: the
/// counter moves through a single store-level increment, never through an
/// application-side read-modify-write, and no lock outlives a store call.
pub struct ResolverService {
    store: Arc<dyn MappingStore>,
}

impl ResolverService {
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self { store }
    }

    /// Resolves `code` and returns its destination URL.
    ///
    /// The destination is only returned once the click increment has been
    /// applied.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`]: the code has no mapping. Expected
    ///   outcome, no state was changed.
    /// - [`AppError::IncrementFailed`]: the mapping exists but the
    ///   counter update failed; kept distinct from `NotFound`.
    /// - [`AppError::StoreUnavailable`]: the lookup itself failed;
    ///   never reported as `NotFound`.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        // Every stored code is generator-shaped, so anything else cannot
        // exist and skips the store round trip.
        if !is_well_formed_code(code) {
            return Err(unknown_code(code));
        }

        let mapping = self
            .store
            .find_by_code(code)
            .await
            .map_err(AppError::StoreUnavailable)?
            .ok_or_else(|| unknown_code(code))?;

        self.store
            .increment_clicks(&mapping.code)
            .await
            .map_err(|e| {
                tracing::error!(code = %mapping.code, error = %e, "click increment failed");
                AppError::IncrementFailed(e)
            })?;

        Ok(mapping.destination)
    }
}

fn unknown_code(code: &str) -> AppError {
    AppError::not_found("Unknown short code", json!({ "code": code }))
}
