//! Command implementations for the NHL dashboard CLI

pub mod common;
pub mod game_flow;
pub mod game_stats;
pub mod schedule;
pub mod serve;

use crate::cli::types::TeamAbbrev;
use crate::error::{DashError, Result};
use crate::TEAM_ENV_VAR;

/// Resolve the team to operate on: explicit flag first, then the
/// `NHL_DASH_TEAM` environment variable.
pub fn resolve_team(team: Option<TeamAbbrev>) -> Result<TeamAbbrev> {
    if let Some(team) = team {
        return Ok(team);
    }

    match std::env::var(TEAM_ENV_VAR) {
        Ok(raw) => raw.parse(),
        Err(_) => Err(DashError::MissingTeam {
            env_var: TEAM_ENV_VAR.to_string(),
        }),
    }
}
