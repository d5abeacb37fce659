//! Integration tests for the analytics core, exercised through the public
//! library API.

use nhl_dash::analytics::flow::build_flow;
use nhl_dash::analytics::possession::{
    corsi_for, fenwick_for, goals_for_percent, pdo, percent_for,
};
use nhl_dash::analytics::rink::{
    normalize_to_attacking_half, seconds_to_clock, time_to_absolute_seconds, RinkGeometry,
};
use nhl_dash::analytics::xg::estimate_xg;
use nhl_dash::{ShotEvent, ShotKind};

fn event(kind: ShotKind, period: u32, clock_time: &str) -> ShotEvent {
    ShotEvent {
        event_id: 0,
        period,
        clock_time: clock_time.to_string(),
        kind,
        x: 60.0,
        y: -12.0,
        shooter_id: None,
        shooter_name: None,
        shot_type: None,
        x_g: None,
    }
}

#[test]
fn fenwick_is_a_subset_of_corsi() {
    let kinds = [
        ShotKind::ShotOnGoal,
        ShotKind::MissedShot,
        ShotKind::BlockedShot,
        ShotKind::Goal,
    ];

    // Grow a list one event at a time across every composition prefix.
    let mut events = Vec::new();
    for kind in kinds.iter().cycle().take(64) {
        events.push(event(*kind, 1, "00:30"));
        assert!(fenwick_for(&events) <= corsi_for(&events));
    }
}

#[test]
fn zero_tie_breaks() {
    assert_eq!(percent_for(0, 0), 50.0);
    assert_eq!(goals_for_percent(0, 0), 50.0);
}

#[test]
fn pdo_baseline_is_100() {
    assert_eq!(pdo(0, 0, 0, 0), 100.0);
}

#[test]
fn xg_stays_within_bounds() {
    let types = [None, Some("slap"), Some("tip-in"), Some("unknown-type")];
    for xi in -20..=20 {
        for yi in -8..=8 {
            let x = xi as f64 * 5.0;
            let y = yi as f64 * 5.0;
            for shot_type in types {
                let value = estimate_xg(x, y, shot_type);
                assert!((0.01..=0.95).contains(&value));
            }
        }
    }
}

#[test]
fn xg_point_blank_tip_in_matches_formula() {
    // Distance 0, angle 0: 0.4 base times the 1.3 tip-in multiplier.
    assert!((estimate_xg(89.0, 0.0, Some("tip-in")) - 0.52).abs() < 1e-12);
}

#[test]
fn attacking_half_normalization_is_idempotent() {
    for xi in -10..=10 {
        for yi in -4..=4 {
            let (x1, y1) = normalize_to_attacking_half(xi as f64 * 10.0, yi as f64 * 10.0);
            assert!(x1 >= 0.0);
            assert_eq!(normalize_to_attacking_half(x1, y1), (x1, y1));
        }
    }
}

#[test]
fn flow_counters_are_monotone_and_consistent() {
    let home = vec![
        event(ShotKind::ShotOnGoal, 1, "01:11"),
        event(ShotKind::Goal, 1, "15:00"),
        event(ShotKind::BlockedShot, 2, "10:10"),
        event(ShotKind::MissedShot, 3, "19:59"),
    ];
    let away = vec![
        event(ShotKind::MissedShot, 1, "08:00"),
        event(ShotKind::ShotOnGoal, 2, "10:10"),
        event(ShotKind::ShotOnGoal, 3, "00:01"),
    ];

    let points = build_flow(&home, &away).unwrap();
    assert_eq!(points.len(), 7);

    let (mut prev_home, mut prev_away) = (0u32, 0u32);
    for point in &points {
        assert!(point.home_running_count >= prev_home);
        assert!(point.away_running_count >= prev_away);
        assert_eq!(
            point.differential,
            i64::from(point.home_running_count) - i64::from(point.away_running_count)
        );
        prev_home = point.home_running_count;
        prev_away = point.away_running_count;
    }
}

#[test]
fn flow_sorts_across_sides_chronologically() {
    let home = vec![event(ShotKind::Goal, 1, "05:00")];
    let away = vec![event(ShotKind::ShotOnGoal, 1, "10:00")];

    let points = build_flow(&home, &away).unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(
        (
            points[0].home_running_count,
            points[0].away_running_count,
            points[0].differential
        ),
        (1, 0, 1)
    );
    assert_eq!(
        (
            points[1].home_running_count,
            points[1].away_running_count,
            points[1].differential
        ),
        (1, 1, 0)
    );
}

#[test]
fn empty_inputs_are_not_errors() {
    assert_eq!(corsi_for(&[]), 0);
    assert_eq!(percent_for(0, 0), 50.0);
    assert!(build_flow(&[], &[]).unwrap().is_empty());
}

#[test]
fn display_mapping_covers_the_box() {
    let rink = RinkGeometry::default();
    assert_eq!(rink.to_display(-100.0, -42.5, 1000.0, 425.0), (0.0, 0.0));
    assert_eq!(
        rink.to_display(100.0, 42.5, 1000.0, 425.0),
        (1000.0, 425.0)
    );
}

#[test]
fn clock_conversions_preserve_the_documented_asymmetry() {
    let abs = time_to_absolute_seconds("07:15", 3).unwrap();
    assert_eq!(abs, 2 * 1200 + 7 * 60 + 15);
    // seconds_to_clock deliberately does not subtract the period offset.
    assert_eq!(seconds_to_clock(abs), "47:15");
    // Restricted to a within-period offset it is a left inverse.
    assert_eq!(
        seconds_to_clock(time_to_absolute_seconds("07:15", 1).unwrap()),
        "07:15"
    );
}
