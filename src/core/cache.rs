//! In-memory TTL response cache.
//!
//! A keyed store with explicit expiry, bounded by an LRU so a long-running
//! server cannot grow without limit. There is deliberately no global
//! instance: the cache is constructed once at startup and passed to the
//! fetch layer as an explicit collaborator.

use lru::LruCache;
use serde_json::Value;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::cli::types::{GameId, Season, TeamAbbrev};

/// Default time-to-live for upstream responses. Live play-by-play moves
/// fast; a minute keeps the dashboard fresh without hammering the API.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;

struct TtlEntry<V> {
    value: V,
    stored_at: Instant,
}

/// LRU-bounded map whose entries expire `ttl` after insertion.
pub struct TtlCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    entries: Mutex<LruCache<K, TtlEntry<V>>>,
    ttl: Duration,
    capacity: usize,
}

impl<K, V> TtlCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(NonZeroUsize::new(capacity).unwrap())),
            ttl,
            capacity,
        }
    }

    /// Get a live entry. Expired entries are evicted on the way out.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(entry.value.clone()),
            Some(_) => {
                entries.pop(key);
                None
            }
            None => None,
        }
    }

    pub fn put(&self, key: K, value: V) {
        let entry = TtlEntry {
            value,
            stored_at: Instant::now(),
        };
        self.entries.lock().unwrap().put(key, entry);
    }

    /// Drop one entry, if present (used when a caller forces a refresh).
    pub fn invalidate(&self, key: &K) {
        self.entries.lock().unwrap().pop(key);
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    /// (live-or-expired entry count, capacity)
    pub fn stats(&self) -> (usize, usize) {
        (self.entries.lock().unwrap().len(), self.capacity)
    }
}

/// Cache key for play-by-play responses
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayByPlayCacheKey {
    pub game_id: GameId,
}

/// Cache key for club schedule responses
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScheduleCacheKey {
    pub team: TeamAbbrev,
    pub season: Season,
}

/// All upstream response caches, one per endpoint family. Raw payloads are
/// stored as `serde_json::Value` snapshots; typed parsing happens at the
/// point of use.
pub struct ResponseCache {
    pub play_by_play: TtlCache<PlayByPlayCacheKey, Value>,
    pub schedule: TtlCache<ScheduleCacheKey, Value>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            play_by_play: TtlCache::new(100, ttl),
            schedule: TtlCache::new(50, ttl),
        }
    }

    /// Cache with the default TTL window.
    pub fn with_default_ttl() -> Self {
        Self::new(Duration::from_secs(DEFAULT_CACHE_TTL_SECS))
    }
}
