//! Core utilities shared across the application:
//! - `cache`: in-memory TTL response cache
//! - `http`: reqwest client construction

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{ResponseCache, TtlCache, DEFAULT_CACHE_TTL_SECS};
pub use http::build_client;
