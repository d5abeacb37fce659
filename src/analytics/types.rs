//! Flat shot-event records shared by the analytics functions and the API
//! surface.

use serde::{Deserialize, Serialize};
use std::fmt;


/// Classification of a shot attempt, matching the NHL play-by-play
/// `typeDescKey` vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShotKind {
    ShotOnGoal,
    MissedShot,
    BlockedShot,
    Goal,
}

impl ShotKind {
    /// Map an upstream `typeDescKey` onto a shot kind. Non-shot play types
    /// (faceoffs, hits, stoppages, ...) return `None`.
    pub fn from_type_desc(key: &str) -> Option<Self> {
        match key {
            "shot-on-goal" => Some(Self::ShotOnGoal),
            "missed-shot" => Some(Self::MissedShot),
            "blocked-shot" => Some(Self::BlockedShot),
            "goal" => Some(Self::Goal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShotOnGoal => "shot-on-goal",
            Self::MissedShot => "missed-shot",
            Self::BlockedShot => "blocked-shot",
            Self::Goal => "goal",
        }
    }
}

impl fmt::Display for ShotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which bench a shot attempt belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// One shot attempt, reshaped out of an upstream play-by-play record.
///
/// Constructed once by the fetch layer and never mutated afterwards; derived
/// views (display coordinates, Corsi/Fenwick classification, xG) are computed
/// from it, not written back into it. The only exception is `x_g`, which the
/// presentation assembly fills on its own clone of the event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotEvent {
    pub event_id: u64,
    /// 1-based period number; 4 and up are overtime periods.
    pub period: u32,
    /// Elapsed time within the period, zero-padded "MM:SS".
    pub clock_time: String,
    pub kind: ShotKind,
    /// Rink feet, x in [-100, 100] with 0 at center ice.
    pub x: f64,
    /// Rink feet, y in [-42.5, 42.5] with 0 at center ice.
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shooter_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shooter_name: Option<String>,
    /// Free-form shot type from the feed, e.g. "wrist", "slap".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shot_type: Option<String>,
    /// Heuristic goal probability, filled by the presentation layer.
    #[serde(rename = "xG", skip_serializing_if = "Option::is_none")]
    pub x_g: Option<f64>,
}

/// One cumulative-state sample of the shot-attempt flow, emitted per
/// qualifying event in chronological order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowPoint {
    pub period: u32,
    pub time: String,
    pub kind: ShotKind,
    pub home_running_count: u32,
    pub away_running_count: u32,
    /// `home_running_count - away_running_count` at this point in the game.
    pub differential: i64,
}
