//! Shared application state for the query API server.

use std::sync::Arc;

use fraglog_store::MemoryGameRepository;
use tokio::sync::RwLock;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The
/// repository is behind a read-write lock so the query side could
/// coexist with an in-progress ingestion; all API reads take the read
/// half only.
#[derive(Clone)]
pub struct AppState {
    /// The game repository populated by ingestion.
    pub repository: Arc<RwLock<MemoryGameRepository>>,
}

impl AppState {
    /// Wrap an ingested repository for serving.
    pub fn new(repository: MemoryGameRepository) -> Self {
        Self {
            repository: Arc::new(RwLock::new(repository)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(MemoryGameRepository::new())
    }
}
