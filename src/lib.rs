//! NHL Team Dashboard Backend Library
//!
//! A Rust backend for a browser dashboard visualizing NHL statistics for a
//! single team: a thin server that proxies the public NHL API and reshapes
//! its play-by-play feed into flat shot records, plus a small analytic core
//! deriving possession metrics from them.
//!
//! ## Features
//!
//! - **Possession Metrics**: Corsi, Fenwick, PDO, and share percentages per
//!   side of a game
//! - **Expected Goals**: heuristic per-shot goal probability from location
//!   and shot type
//! - **Shot Maps**: rink coordinates folded onto one attacking half and
//!   mapped to display space
//! - **Shot Flow**: chronological running shot-attempt differential
//! - **Response Caching**: in-memory TTL cache in front of the NHL API
//! - **HTTP API + CLI**: the same derived records served as JSON or printed
//!   one-shot
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nhl_dash::{commands::game_stats::handle_game_stats, GameId};
//!
//! # async fn example() -> nhl_dash::Result<()> {
//! // Print both sides' possession metrics for one game
//! handle_game_stats(GameId::new(2024020500), false, false, false).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your team to avoid passing it in every command:
//! ```bash
//! export NHL_DASH_TEAM=TOR
//! ```

pub mod analytics;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod http;
pub mod nhl;

// Re-export commonly used types
pub use analytics::types::{FlowPoint, ShotEvent, ShotKind, Side};
pub use cli::types::{GameId, Season, TeamAbbrev};
pub use error::{DashError, Result};

pub const TEAM_ENV_VAR: &str = "NHL_DASH_TEAM";
