//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::{GameId, Season, TeamAbbrev};

#[derive(Debug, Parser)]
#[clap(name = "nhl-dash", about = "NHL team dashboard backend and CLI")]
pub struct NhlDash {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get derived data from the NHL API
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },

    /// Run the HTTP server backing the dashboard UI
    Serve {
        /// Bind address.
        #[clap(long, default_value = "0.0.0.0")]
        host: String,

        /// Bind port.
        #[clap(long, short, default_value_t = 8080)]
        port: u16,

        /// Upstream response cache TTL in seconds.
        #[clap(long, default_value_t = crate::core::cache::DEFAULT_CACHE_TTL_SECS)]
        cache_ttl: u64,
    },
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// List a team's games for a season.
    Schedule {
        /// Team abbreviation (or set `NHL_DASH_TEAM` env var).
        #[clap(long, short)]
        team: Option<TeamAbbrev>,

        /// Season in eight-digit form (e.g. 20242025).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Force refresh from the NHL API even if cached data exists
        #[clap(long)]
        refresh: bool,
    },

    /// Possession metrics and xG totals for both sides of one game.
    ///
    /// Fetches `/gamecenter/{id}/play-by-play` and derives Corsi, Fenwick,
    /// PDO, and summed expected goals per side.
    GameStats {
        /// Game ID (e.g. 2024020500).
        #[clap(long, short = 'g')]
        game_id: GameId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Force refresh from the NHL API even if cached data exists
        #[clap(long)]
        refresh: bool,

        /// Print cache status while fetching.
        #[clap(long)]
        verbose: bool,
    },

    /// Running shot-attempt differential for one game.
    Flow {
        /// Game ID (e.g. 2024020500).
        #[clap(long, short = 'g')]
        game_id: GameId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Force refresh from the NHL API even if cached data exists
        #[clap(long)]
        refresh: bool,
    },
}
