//! Response records served to the dashboard, and their assembly from
//! upstream payloads.
//!
//! Assembly lives here (not in the handlers) so the CLI one-shot commands
//! can print exactly the JSON the server would serve.

use serde::Serialize;

use crate::analytics::possession::{
    corsi_for, fenwick_for, goals_for, goals_for_percent, pdo, percent_for, shots_on_goal_for,
};
use crate::analytics::rink::{normalize_to_attacking_half, RinkGeometry};
use crate::analytics::types::{FlowPoint, ShotEvent, ShotKind, Side};
use crate::analytics::{build_flow, estimate_xg};
use crate::cli::types::{Season, TeamAbbrev};
use crate::nhl::types::{ClubSchedule, PlayByPlay};
use crate::Result;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRow {
    pub game_id: u64,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub home: String,
    pub away: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_score: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub team: String,
    pub season: u32,
    pub games: Vec<ScheduleRow>,
}

impl ScheduleResponse {
    pub fn from_schedule(team: &TeamAbbrev, season: Season, schedule: &ClubSchedule) -> Self {
        let games = schedule
            .games
            .iter()
            .map(|game| ScheduleRow {
                game_id: game.id,
                date: game.game_date.clone(),
                state: game.game_state.clone(),
                home: game.home_team.abbrev.clone(),
                away: game.away_team.abbrev.clone(),
                home_score: game.home_team.score,
                away_score: game.away_team.score,
            })
            .collect();

        Self {
            team: team.to_string(),
            season: season.as_u32(),
            games,
        }
    }
}

/// One side's derived possession numbers for a single game.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMetrics {
    pub team: String,
    pub corsi: usize,
    pub fenwick: usize,
    pub corsi_pct: f64,
    pub fenwick_pct: f64,
    pub goals: usize,
    pub shots_on_goal: usize,
    pub goals_pct: f64,
    pub pdo: f64,
    /// Sum of per-shot xG over this side's attempts.
    pub expected_goals: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMetricsResponse {
    pub game_id: u64,
    pub home: TeamMetrics,
    pub away: TeamMetrics,
}

fn expected_goals_total(events: &[ShotEvent]) -> f64 {
    events
        .iter()
        .map(|e| estimate_xg(e.x, e.y, e.shot_type.as_deref()))
        .sum()
}

fn side_metrics(team: String, events: &[ShotEvent], against: &[ShotEvent]) -> TeamMetrics {
    let corsi = corsi_for(events);
    let fenwick = fenwick_for(events);
    let goals = goals_for(events);
    let shots_on_goal = shots_on_goal_for(events);

    TeamMetrics {
        team,
        corsi,
        fenwick,
        corsi_pct: percent_for(corsi, corsi_for(against)),
        fenwick_pct: percent_for(fenwick, fenwick_for(against)),
        goals,
        shots_on_goal,
        goals_pct: goals_for_percent(goals, goals_for(against)),
        pdo: pdo(
            goals,
            shots_on_goal,
            goals_for(against),
            shots_on_goal_for(against),
        ),
        expected_goals: expected_goals_total(events),
    }
}

impl GameMetricsResponse {
    pub fn from_play_by_play(pbp: &PlayByPlay) -> Self {
        let (home_events, away_events) = pbp.shot_events_by_side();

        Self {
            game_id: pbp.id,
            home: side_metrics(pbp.home_team.abbrev.clone(), &home_events, &away_events),
            away: side_metrics(pbp.away_team.abbrev.clone(), &away_events, &home_events),
        }
    }
}

/// One dot on the half-rink shot chart: display coordinates plus enough
/// event context for a tooltip.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotMapDot {
    pub side: Side,
    pub kind: ShotKind,
    pub period: u32,
    pub time: String,
    pub dx: f64,
    pub dy: f64,
    #[serde(rename = "xG")]
    pub x_g: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shooter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shot_type: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotMapResponse {
    pub game_id: u64,
    pub width: f64,
    pub height: f64,
    pub shots: Vec<ShotMapDot>,
}

impl ShotMapResponse {
    /// Both sides' shots, folded onto one attacking half and mapped onto a
    /// `width` x `height` display box.
    pub fn from_play_by_play(
        pbp: &PlayByPlay,
        geometry: &RinkGeometry,
        width: f64,
        height: f64,
    ) -> Self {
        let (home_events, away_events) = pbp.shot_events_by_side();
        let sides = [(Side::Home, home_events), (Side::Away, away_events)];

        let mut shots = Vec::new();
        for (side, events) in sides {
            for event in events {
                let (nx, ny) = normalize_to_attacking_half(event.x, event.y);
                let (dx, dy) = geometry.to_display(nx, ny, width, height);
                shots.push(ShotMapDot {
                    side,
                    kind: event.kind,
                    period: event.period,
                    time: event.clock_time.clone(),
                    dx,
                    dy,
                    x_g: estimate_xg(event.x, event.y, event.shot_type.as_deref()),
                    shooter_name: event.shooter_name.clone(),
                    shot_type: event.shot_type.clone(),
                });
            }
        }

        Self {
            game_id: pbp.id,
            width,
            height,
            shots,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowResponse {
    pub game_id: u64,
    pub points: Vec<FlowPoint>,
}

impl FlowResponse {
    /// Fails only if an upstream clock string does not parse.
    pub fn from_play_by_play(pbp: &PlayByPlay) -> Result<Self> {
        let (home_events, away_events) = pbp.shot_events_by_side();
        let points = build_flow(&home_events, &away_events)?;

        Ok(Self {
            game_id: pbp.id,
            points,
        })
    }
}

#[cfg(test)]
mod tests;
