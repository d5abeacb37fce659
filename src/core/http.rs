//! HTTP client construction for NHL API communication.

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;

/// User agent sent on every upstream request.
pub const APP_USER_AGENT: &str = concat!("nhl-dash/", env!("CARGO_PKG_VERSION"));

/// Default headers for the NHL API: it is public and unauthenticated, so
/// only content negotiation is needed.
pub fn default_header_map() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Build the shared reqwest client used by every fetcher.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(APP_USER_AGENT)
        .default_headers(default_header_map())
        .build()?;
    Ok(client)
}
