//! Running shot-attempt differential across both sides of a game.

use super::possession::is_corsi_event;
use super::rink::time_to_absolute_seconds;
use super::types::{FlowPoint, ShotEvent, Side};
use crate::error::Result;

/// Merge both sides' shot events chronologically and walk them once,
/// emitting a cumulative-count snapshot at every Corsi event.
///
/// Ordering is by game-elapsed seconds computed from each event's period and
/// clock, not by comparing clock strings, so events survive a feed that
/// forgets to zero-pad minutes. A clock that does not parse fails the whole
/// call before any point is emitted. The sort is stable, so simultaneous
/// events keep home-before-away merge order.
pub fn build_flow(home_events: &[ShotEvent], away_events: &[ShotEvent]) -> Result<Vec<FlowPoint>> {
    let mut merged: Vec<(Side, &ShotEvent, u32)> =
        Vec::with_capacity(home_events.len() + away_events.len());
    for event in home_events {
        let seconds = time_to_absolute_seconds(&event.clock_time, event.period)?;
        merged.push((Side::Home, event, seconds));
    }
    for event in away_events {
        let seconds = time_to_absolute_seconds(&event.clock_time, event.period)?;
        merged.push((Side::Away, event, seconds));
    }

    merged.sort_by_key(|(_, _, seconds)| *seconds);

    let mut home_count: u32 = 0;
    let mut away_count: u32 = 0;
    let mut points = Vec::new();

    for (side, event, _) in merged {
        if !is_corsi_event(event.kind) {
            continue;
        }
        match side {
            Side::Home => home_count += 1,
            Side::Away => away_count += 1,
        }
        points.push(FlowPoint {
            period: event.period,
            time: event.clock_time.clone(),
            kind: event.kind,
            home_running_count: home_count,
            away_running_count: away_count,
            differential: i64::from(home_count) - i64::from(away_count),
        });
    }

    Ok(points)
}
