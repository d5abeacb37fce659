//! Possession metrics over shot-event lists: Corsi, Fenwick, PDO, and the
//! share percentages derived from them.
//!
//! All functions are total over any finite input, including empty lists and
//! zero denominators. The zero cases use the conventional tie-breaks (50%
//! share with no attempts, 100% save rate with no shots faced) rather than
//! erroring.

use super::types::{ShotEvent, ShotKind};


/// Corsi counts every shot attempt: on goal, missed, blocked, or scored.
pub fn is_corsi_event(kind: ShotKind) -> bool {
    matches!(
        kind,
        ShotKind::ShotOnGoal | ShotKind::MissedShot | ShotKind::BlockedShot | ShotKind::Goal
    )
}

/// Fenwick counts unblocked attempts only.
pub fn is_fenwick_event(kind: ShotKind) -> bool {
    matches!(
        kind,
        ShotKind::ShotOnGoal | ShotKind::MissedShot | ShotKind::Goal
    )
}

pub fn corsi_for(events: &[ShotEvent]) -> usize {
    events.iter().filter(|e| is_corsi_event(e.kind)).count()
}

pub fn fenwick_for(events: &[ShotEvent]) -> usize {
    events.iter().filter(|e| is_fenwick_event(e.kind)).count()
}

/// Goals scored within an event list.
pub fn goals_for(events: &[ShotEvent]) -> usize {
    events.iter().filter(|e| e.kind == ShotKind::Goal).count()
}

/// Shots on goal, with goals included (a goal is a shot that went in).
pub fn shots_on_goal_for(events: &[ShotEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e.kind, ShotKind::ShotOnGoal | ShotKind::Goal))
        .count()
}

/// Share of `for_count` against the combined total, as a percentage.
/// Returns 50.0 when neither side has an attempt.
pub fn percent_for(for_count: usize, against_count: usize) -> f64 {
    let total = for_count + against_count;
    if total == 0 {
        50.0
    } else {
        100.0 * for_count as f64 / total as f64
    }
}

/// Goals-for percentage with the same no-data tie-break as `percent_for`.
pub fn goals_for_percent(goals_for: usize, goals_against: usize) -> f64 {
    percent_for(goals_for, goals_against)
}

/// PDO: shooting percentage plus save percentage.
///
/// Shooting% is 0 with no shots taken; save% is 100 with no shots faced.
/// Clusters around 100 over a large sample; no further normalization.
pub fn pdo(
    goals_for: usize,
    shots_for: usize,
    goals_against: usize,
    shots_against: usize,
) -> f64 {
    let shooting_pct = if shots_for == 0 {
        0.0
    } else {
        goals_for as f64 / shots_for as f64 * 100.0
    };
    let save_pct = if shots_against == 0 {
        100.0
    } else {
        shots_against.saturating_sub(goals_against) as f64 / shots_against as f64 * 100.0
    };
    shooting_pct + save_pct
}
