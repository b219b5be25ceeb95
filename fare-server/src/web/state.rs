//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedBackendClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Cached fare backend client
    pub backend: Arc<CachedBackendClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(backend: CachedBackendClient) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }
}
