//! NHL api-web client: payload types, endpoint calls, and cache-aware
//! fetch wrappers.

pub mod fetch;
pub mod http;
pub mod types;

pub use fetch::{fetch_club_schedule, fetch_play_by_play, CacheStatus};
