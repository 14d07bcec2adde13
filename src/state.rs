use std::sync::Arc;
use crate::cache::ResponseCache;
use crate::ollama::ModelBackend;

// app's shared state
pub struct AppState {
    pub backend: Arc<dyn ModelBackend>, // Ollama, or a fake in tests
    pub cache: ResponseCache,
}

impl AppState {
    pub fn new(backend: Arc<dyn ModelBackend>, cache: ResponseCache) -> Self {
        Self { backend, cache }
    }
}
