use matching_engine::{MatchingEngine, SystemClock, TracingLog};
use std::sync::{Arc, Mutex};

/// Shared handler state
///
/// The engine runs single-threaded; the mutex serializes entry from the
/// HTTP front-end. Handlers never hold the lock across an await.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Mutex<MatchingEngine>>,
    pub response_buffer: usize,
}

impl AppState {
    pub fn new(response_buffer: usize) -> Self {
        let engine = MatchingEngine::new(Arc::new(SystemClock), Arc::new(TracingLog));
        Self {
            engine: Arc::new(Mutex::new(engine)),
            response_buffer,
        }
    }
}
