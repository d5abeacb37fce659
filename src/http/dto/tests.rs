use super::*;
use serde_json::json;

fn pbp_fixture() -> PlayByPlay {
    serde_json::from_value(json!({
        "id": 2024020500,
        "homeTeam": {"id": 10, "abbrev": "TOR"},
        "awayTeam": {"id": 6, "abbrev": "BOS"},
        "rosterSpots": [],
        "plays": [
            {
                "eventId": 1,
                "periodDescriptor": {"number": 1},
                "timeInPeriod": "02:00",
                "typeDescKey": "shot-on-goal",
                "details": {"xCoord": 80, "yCoord": 5, "shotType": "wrist",
                            "eventOwnerTeamId": 10}
            },
            {
                "eventId": 2,
                "periodDescriptor": {"number": 1},
                "timeInPeriod": "05:00",
                "typeDescKey": "goal",
                "details": {"xCoord": 85, "yCoord": 0, "shotType": "tip-in",
                            "eventOwnerTeamId": 10}
            },
            {
                "eventId": 3,
                "periodDescriptor": {"number": 1},
                "timeInPeriod": "03:00",
                "typeDescKey": "missed-shot",
                "details": {"xCoord": -70, "yCoord": -10,
                            "eventOwnerTeamId": 6}
            },
            {
                "eventId": 4,
                "periodDescriptor": {"number": 2},
                "timeInPeriod": "10:00",
                "typeDescKey": "blocked-shot",
                "details": {"xCoord": -60, "yCoord": 20,
                            "eventOwnerTeamId": 10}
            }
        ]
    }))
    .unwrap()
}

#[test]
fn test_game_metrics_counts_and_percentages() {
    let metrics = GameMetricsResponse::from_play_by_play(&pbp_fixture());

    // Home: shot-on-goal + goal. Away: missed shot, plus the blocked
    // attempt the feed credited to the home side as the blocking team.
    assert_eq!(metrics.home.corsi, 2);
    assert_eq!(metrics.home.fenwick, 2);
    assert_eq!(metrics.home.goals, 1);
    assert_eq!(metrics.home.shots_on_goal, 2);

    assert_eq!(metrics.away.corsi, 2);
    assert_eq!(metrics.away.fenwick, 1);
    assert_eq!(metrics.away.goals, 0);

    assert_eq!(metrics.home.corsi_pct, 50.0);
    assert!((metrics.home.fenwick_pct - 100.0 * 2.0 / 3.0).abs() < 1e-9);
    assert_eq!(metrics.home.goals_pct, 100.0);
    // Home: 1 goal on 2 shots = 50 shooting%, clean sheet = 100 save%.
    assert_eq!(metrics.home.pdo, 150.0);
    assert_eq!(metrics.away.pdo, 50.0);

    assert!(metrics.home.expected_goals > 0.0);
}

#[test]
fn test_game_metrics_sides_mirror() {
    let metrics = GameMetricsResponse::from_play_by_play(&pbp_fixture());
    assert!((metrics.home.corsi_pct + metrics.away.corsi_pct - 100.0).abs() < 1e-9);
    assert!((metrics.home.goals_pct + metrics.away.goals_pct - 100.0).abs() < 1e-9);
}

#[test]
fn test_game_metrics_empty_game() {
    let empty: PlayByPlay = serde_json::from_value(json!({
        "id": 1,
        "homeTeam": {"id": 10, "abbrev": "TOR"},
        "awayTeam": {"id": 6, "abbrev": "BOS"},
        "plays": []
    }))
    .unwrap();

    let metrics = GameMetricsResponse::from_play_by_play(&empty);
    assert_eq!(metrics.home.corsi, 0);
    assert_eq!(metrics.home.corsi_pct, 50.0);
    assert_eq!(metrics.home.pdo, 100.0);
    assert_eq!(metrics.home.expected_goals, 0.0);
}

#[test]
fn test_shot_map_folds_and_scales() {
    let response = ShotMapResponse::from_play_by_play(
        &pbp_fixture(),
        &RinkGeometry::default(),
        800.0,
        340.0,
    );

    assert_eq!(response.shots.len(), 4);
    assert_eq!(response.width, 800.0);
    // Every dot lands in the attacking (right) half of the display after
    // normalization, including the away side's defensive-zone coordinates.
    for dot in &response.shots {
        assert!(dot.dx >= 400.0, "dot at dx {} not folded", dot.dx);
        assert!((0.0..=340.0).contains(&dot.dy));
        assert!((0.01..=0.95).contains(&dot.x_g));
    }
}

#[test]
fn test_shot_map_xg_uses_shot_type() {
    let response = ShotMapResponse::from_play_by_play(
        &pbp_fixture(),
        &RinkGeometry::default(),
        800.0,
        340.0,
    );
    let tip_in = response
        .shots
        .iter()
        .find(|d| d.shot_type.as_deref() == Some("tip-in"))
        .unwrap();
    // (85, 0): distance 4, angle 0 -> (0.4 - 0.032) * 1.3.
    assert!((tip_in.x_g - 0.368 * 1.3).abs() < 1e-9);
}

#[test]
fn test_flow_response_orders_by_game_clock() {
    let flow = FlowResponse::from_play_by_play(&pbp_fixture()).unwrap();
    assert_eq!(flow.points.len(), 4);

    let times: Vec<&str> = flow.points.iter().map(|p| p.time.as_str()).collect();
    assert_eq!(times, vec!["02:00", "03:00", "05:00", "10:00"]);
    assert_eq!(flow.points[2].differential, 1);
    assert_eq!(flow.points[3].differential, 0);
}

#[test]
fn test_schedule_response_rows() {
    let schedule: ClubSchedule = serde_json::from_value(json!({
        "games": [{
            "id": 2024020500,
            "gameDate": "2024-12-14",
            "gameState": "OFF",
            "homeTeam": {"abbrev": "TOR", "score": 2},
            "awayTeam": {"abbrev": "BOS", "score": 1}
        }]
    }))
    .unwrap();

    let team: TeamAbbrev = "TOR".parse().unwrap();
    let response = ScheduleResponse::from_schedule(&team, Season::new(20242025), &schedule);
    assert_eq!(response.team, "TOR");
    assert_eq!(response.season, 20242025);
    assert_eq!(response.games.len(), 1);
    assert_eq!(response.games[0].game_id, 2024020500);
    assert_eq!(response.games[0].home_score, Some(2));
}

#[test]
fn test_health_response() {
    let health = HealthResponse::ok();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}
