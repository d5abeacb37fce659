//! Common utilities shared across commands.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::core::cache::ResponseCache;
use crate::core::http::build_client;
use crate::nhl::CacheStatus;
use crate::Result;

/// Context containing the resources every command needs: the shared
/// upstream client and the TTL cache it reads through.
pub struct CommandContext {
    pub client: Client,
    pub cache: Arc<ResponseCache>,
}

impl CommandContext {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            cache: Arc::new(ResponseCache::with_default_ttl()),
        })
    }

    pub fn with_cache_ttl(ttl_secs: u64) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            cache: Arc::new(ResponseCache::new(Duration::from_secs(ttl_secs))),
        })
    }
}

/// Verbose-mode one-liner describing where a payload came from.
pub fn print_cache_status(verbose: bool, what: &str, status: CacheStatus) {
    if !verbose {
        return;
    }
    match status {
        CacheStatus::Hit => println!("✓ {} loaded (from cache)", what),
        CacheStatus::Miss => println!("✓ {} fetched (cache miss)", what),
        CacheStatus::Refreshed => println!("✓ {} fetched (refreshed)", what),
    }
}
