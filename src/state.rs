//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AllocatorService, HistoryService, ResolverService};
use crate::domain::repositories::MappingStore;

/// Handler-facing state: the three core services plus the public base
/// URL used to render short links.
///
/// All fields are shared handles; cloning the state per request is cheap
/// and no request ever holds mutable state.
#[derive(Clone)]
pub struct AppState {
    pub allocator: Arc<AllocatorService>,
    pub resolver: Arc<ResolverService>,
    pub history: Arc<HistoryService>,
    pub public_base_url: String,
}

impl AppState {
    /// Builds the service graph over a single mapping store.
    pub fn new(store: Arc<dyn MappingStore>, public_base_url: String) -> Self {
        Self {
            allocator: Arc::new(AllocatorService::new(store.clone())),
            resolver: Arc::new(ResolverService::new(store.clone())),
            history: Arc::new(HistoryService::new(store)),
            public_base_url,
        }
    }

    /// Renders the displayable short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::MemoryMappingStore;

    #[test]
    fn test_short_url_handles_trailing_slash() {
        let store = Arc::new(MemoryMappingStore::new());
        let state = AppState::new(store, "https://sho.rt/".to_string());

        assert_eq!(state.short_url("abc23456"), "https://sho.rt/abc23456");
    }
}
