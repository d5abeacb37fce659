//! Application state for the HTTP server.

use std::sync::Arc;

use reqwest::Client;

use crate::core::cache::ResponseCache;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared upstream HTTP client (reqwest clients are cheap to clone and
    /// pool connections internally).
    pub client: Client,
    /// TTL cache fronting the NHL API, shared across all requests.
    pub cache: Arc<ResponseCache>,
}

impl AppState {
    pub fn new(client: Client, cache: Arc<ResponseCache>) -> Self {
        Self { client, cache }
    }
}
