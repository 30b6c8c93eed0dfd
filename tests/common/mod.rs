#![allow(dead_code)]

use std::sync::Arc;

use snaplink::AppState;
use snaplink::domain::entities::NewMapping;
use snaplink::domain::repositories::{InsertOutcome, MappingStore};
use snaplink::infrastructure::persistence::MemoryMappingStore;

pub const TEST_BASE_URL: &str = "https://sho.rt";

/// Builds an [`AppState`] over a fresh in-memory store and hands the
/// store back for direct inspection.
pub fn create_test_state() -> (AppState, Arc<MemoryMappingStore>) {
    let store = Arc::new(MemoryMappingStore::new());
    let state = AppState::new(store.clone(), TEST_BASE_URL.to_string());
    (state, store)
}

/// Seeds a mapping directly through the store.
pub async fn create_test_mapping(store: &MemoryMappingStore, code: &str, destination: &str) {
    let outcome = store
        .insert_if_absent(NewMapping {
            code: code.to_string(),
            destination: destination.to_string(),
            origin_tag: "test".to_string(),
        })
        .await
        .unwrap();

    match outcome {
        InsertOutcome::Inserted(_) => {}
        InsertOutcome::DuplicateCode => panic!("duplicate code in test setup: {code}"),
    }
}
