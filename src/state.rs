//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;

/// Default maximum size of a request body, in bytes.
pub const DEFAULT_MAX_BODY_BYTES: usize = 4096;

/// Application state cloned into each request.
///
/// All dependencies are passed in explicitly; nothing is process-global, so
/// every test can build its own state around a fresh store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, max_body_bytes: usize) -> Self {
        Self {
            link_service,
            max_body_bytes,
        }
    }
}
