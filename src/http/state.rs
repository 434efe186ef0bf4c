//! Application state for the HTTP server.

use super::worker::WorkerHandle;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Queue into the analysis worker thread
    pub worker: WorkerHandle,
}

impl AppState {
    pub fn new(worker: WorkerHandle) -> Self {
        Self { worker }
    }
}
