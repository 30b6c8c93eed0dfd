//! Mapping store implementations.

mod memory_mapping_store;
mod pg_mapping_store;

pub use memory_mapping_store::MemoryMappingStore;
pub use pg_mapping_store::PgMappingStore;
