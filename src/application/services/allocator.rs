//! Short-code allocation service.

use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::{InsertOutcome, MappingStore};
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::validate_destination;

/// How many candidate codes are tried before giving up.
///
/// A collision means the insert raced an existing row, so each retry uses
/// a freshly generated code. With a ~2^47 code space the loop almost
/// never runs more than once.
const MAX_ATTEMPTS: u32 = 5;

/// Service that creates new mappings with collision-free short codes.
///
/// The store's insert is the collision check: there is no read-then-write
/// window in which a concurrent allocation could slip in.
pub struct AllocatorService {
    store: Arc<dyn MappingStore>,
}

impl AllocatorService {
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self { store }
    }

    /// Creates a mapping for `destination` and returns the stored row.
    ///
    /// The destination is validated before anything is written. On a code
    /// collision the insert is retried with a new code, up to
    /// `MAX_ATTEMPTS` times.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`]: `destination` is not an absolute
    ///   http/https URL; nothing was written.
    /// - [`AppError::AllocationExhausted`]: every candidate code
    ///   collided; retryable.
    /// - [`AppError::StoreUnavailable`]: the store failed.
    pub async fn allocate(
        &self,
        destination: &str,
        origin_tag: &str,
    ) -> Result<Mapping, AppError> {
        let destination = validate_destination(destination)?;

        for attempt in 1..=MAX_ATTEMPTS {
            let new_mapping = NewMapping {
                code: generate_code(),
                destination: destination.clone(),
                origin_tag: origin_tag.to_string(),
            };

            match self
                .store
                .insert_if_absent(new_mapping)
                .await
                .map_err(AppError::StoreUnavailable)?
            {
                InsertOutcome::Inserted(mapping) => return Ok(mapping),
                InsertOutcome::DuplicateCode => {
                    tracing::warn!(attempt, "short code collision, regenerating");
                }
            }
        }

        Err(AppError::AllocationExhausted {
            attempts: MAX_ATTEMPTS,
        })
    }
}
