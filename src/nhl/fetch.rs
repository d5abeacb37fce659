//! Cache-aware fetch wrappers over the raw endpoint calls.
//!
//! The cache is always handed in by the caller; these functions never own
//! one. Raw payloads are cached as `serde_json::Value` and parsed into
//! typed views on every read, so a schema drift shows up as a parse error
//! at the point of use, not as a stale poisoned cache entry.

use reqwest::Client;
use tracing::debug;

use super::http;
use super::types::{ClubSchedule, PlayByPlay};
use crate::cli::types::{GameId, Season, TeamAbbrev};
use crate::core::cache::{PlayByPlayCacheKey, ResponseCache, ScheduleCacheKey};
use crate::Result;

/// Where a fetched payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Served from the TTL cache.
    Hit,
    /// Not cached (or expired); fetched upstream.
    Miss,
    /// Caller forced a refetch, bypassing a live cache entry.
    Refreshed,
}

/// Fetch one game's play-by-play feed, consulting the cache first unless
/// `refresh` is set.
pub async fn fetch_play_by_play(
    client: &Client,
    cache: &ResponseCache,
    game_id: GameId,
    refresh: bool,
) -> Result<(PlayByPlay, CacheStatus)> {
    let key = PlayByPlayCacheKey { game_id };

    if !refresh {
        if let Some(raw) = cache.play_by_play.get(&key) {
            debug!(%game_id, "play-by-play cache hit");
            return Ok((serde_json::from_value(raw)?, CacheStatus::Hit));
        }
    }

    debug!(%game_id, refresh, "fetching play-by-play upstream");
    let raw = http::get_play_by_play(client, game_id).await?;
    let parsed: PlayByPlay = serde_json::from_value(raw.clone())?;
    cache.play_by_play.put(key, raw);

    let status = if refresh {
        CacheStatus::Refreshed
    } else {
        CacheStatus::Miss
    };
    Ok((parsed, status))
}

/// Fetch a club's season schedule, consulting the cache first unless
/// `refresh` is set.
pub async fn fetch_club_schedule(
    client: &Client,
    cache: &ResponseCache,
    team: &TeamAbbrev,
    season: Season,
    refresh: bool,
) -> Result<(ClubSchedule, CacheStatus)> {
    let key = ScheduleCacheKey {
        team: team.clone(),
        season,
    };

    if !refresh {
        if let Some(raw) = cache.schedule.get(&key) {
            debug!(%team, %season, "schedule cache hit");
            return Ok((serde_json::from_value(raw)?, CacheStatus::Hit));
        }
    }

    debug!(%team, %season, refresh, "fetching schedule upstream");
    let raw = http::get_club_schedule(client, team, season).await?;
    let parsed: ClubSchedule = serde_json::from_value(raw.clone())?;
    cache.schedule.put(key, raw);

    let status = if refresh {
        CacheStatus::Refreshed
    } else {
        CacheStatus::Miss
    };
    Ok((parsed, status))
}
