//! Typed views of NHL api-web payloads, and the reshaping of play-by-play
//! records into flat per-side shot events.
//!
//! Deserialization is deliberately lenient: any field the reshaper can
//! survive without is `#[serde(default)]`, so a payload quirk drops one play
//! instead of failing the whole game.

use serde::Deserialize;
use std::collections::HashMap;

use crate::analytics::types::{ShotEvent, ShotKind};


/// One team's identity block inside a game payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfo {
    pub id: u32,
    pub abbrev: String,
    #[serde(default)]
    pub score: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodDescriptor {
    pub number: u32,
    #[serde(default)]
    pub period_type: Option<String>,
}

/// The `details` object of a play. Which fields are present depends on the
/// play type; shot attempts carry coordinates, shot type, and shooter ids.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayDetails {
    #[serde(default)]
    pub x_coord: Option<f64>,
    #[serde(default)]
    pub y_coord: Option<f64>,
    #[serde(default)]
    pub shot_type: Option<String>,
    #[serde(default)]
    pub shooting_player_id: Option<u64>,
    #[serde(default)]
    pub scoring_player_id: Option<u64>,
    #[serde(default)]
    pub event_owner_team_id: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    pub event_id: u64,
    pub period_descriptor: PeriodDescriptor,
    /// Elapsed time within the period, "MM:SS".
    pub time_in_period: String,
    pub type_desc_key: String,
    #[serde(default)]
    pub details: Option<PlayDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedName {
    pub default: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSpot {
    pub player_id: u64,
    pub first_name: LocalizedName,
    pub last_name: LocalizedName,
}

/// Full play-by-play payload for one game.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayByPlay {
    pub id: u64,
    pub home_team: TeamInfo,
    pub away_team: TeamInfo,
    #[serde(default)]
    pub plays: Vec<Play>,
    #[serde(default)]
    pub roster_spots: Vec<RosterSpot>,
}

impl PlayByPlay {
    /// Player id -> "F. Lastname" display names from the roster block.
    pub fn shooter_names(&self) -> HashMap<u64, String> {
        self.roster_spots
            .iter()
            .map(|spot| {
                let first = &spot.first_name.default;
                let last = &spot.last_name.default;
                let name = match first.chars().next() {
                    Some(initial) => format!("{}. {}", initial, last),
                    None => last.clone(),
                };
                (spot.player_id, name)
            })
            .collect()
    }

    /// Reshape the play list into flat shot events, split `(home, away)`.
    ///
    /// Keeps exactly the plays whose type is a shot attempt and whose
    /// details carry both coordinates and an owning team; anything else is
    /// dropped, not an error. The feed credits blocked shots to the
    /// blocking team, so those are attributed to the opposite side to keep
    /// the attempt with its shooter.
    pub fn shot_events_by_side(&self) -> (Vec<ShotEvent>, Vec<ShotEvent>) {
        let names = self.shooter_names();
        let mut home = Vec::new();
        let mut away = Vec::new();

        for play in &self.plays {
            let Some(kind) = ShotKind::from_type_desc(&play.type_desc_key) else {
                continue;
            };
            let Some(details) = play.details.as_ref() else {
                continue;
            };
            let (Some(x), Some(y)) = (details.x_coord, details.y_coord) else {
                continue;
            };
            let Some(owner) = details.event_owner_team_id else {
                continue;
            };

            let shooter_id = details.scoring_player_id.or(details.shooting_player_id);
            let event = ShotEvent {
                event_id: play.event_id,
                period: play.period_descriptor.number,
                clock_time: play.time_in_period.clone(),
                kind,
                x,
                y,
                shooter_id,
                shooter_name: shooter_id.and_then(|id| names.get(&id).cloned()),
                shot_type: details.shot_type.clone(),
                x_g: None,
            };

            let owner_is_home = owner == self.home_team.id;
            let shooter_is_home = if kind == ShotKind::BlockedShot {
                !owner_is_home
            } else {
                owner_is_home
            };

            if shooter_is_home {
                home.push(event);
            } else {
                away.push(event);
            }
        }

        (home, away)
    }
}

/// A club's season schedule.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubSchedule {
    #[serde(default)]
    pub games: Vec<ScheduledGame>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledGame {
    pub id: u64,
    /// "YYYY-MM-DD"
    pub game_date: String,
    /// "FUT", "LIVE", "OFF", "FINAL", ...
    #[serde(default)]
    pub game_state: Option<String>,
    pub home_team: ScheduledTeam,
    pub away_team: ScheduledTeam,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTeam {
    pub abbrev: String,
    #[serde(default)]
    pub score: Option<u32>,
}
