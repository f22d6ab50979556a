use matching_engine::MatchingEngine;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle to the single engine instance
///
/// Mutating handlers take the write lock, queries take the read lock.
#[derive(Clone, Default)]
pub struct AppState {
    pub engine: Arc<RwLock<MatchingEngine>>,
}

impl AppState {
    pub fn new(engine: MatchingEngine) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
        }
    }
}
