//! Repository traits consumed by the application layer.

mod mapping_store;

pub use mapping_store::{InsertOutcome, MappingStore, StoreError};

#[cfg(test)]
pub use mapping_store::MockMappingStore;
