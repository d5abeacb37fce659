//! Heuristic expected-goals estimator.
//!
//! A closed-form scoring function, not a fitted model: linear decay with
//! distance from the goal mouth, a penalty for sharp angles, and a flat
//! multiplier per shot type. Its contract is determinism and the clamp
//! bounds, nothing more.

use std::f64::consts::PI;

/// Goal-mouth reference point on the x axis, in rink feet. The estimator
/// folds both rink halves onto one via `|x|`, so a single reference works
/// for either attacking direction.
const GOAL_LINE_X: f64 = 89.0;

const BASE_PROBABILITY: f64 = 0.4;
const DISTANCE_DECAY: f64 = 0.008;
const ANGLE_PENALTY: f64 = 0.5;

/// Every shot keeps a nonzero, non-certain scoring probability.
const XG_MIN: f64 = 0.01;
const XG_MAX: f64 = 0.95;

/// Flat multipliers per feed shot type; anything unlisted is 1.0.
const SHOT_TYPE_MULTIPLIERS: [(&str, f64); 7] = [
    ("slap", 0.9),
    ("snap", 1.1),
    ("wrist", 1.0),
    ("backhand", 0.8),
    ("tip-in", 1.3),
    ("deflected", 1.2),
    ("wrap-around", 0.6),
];

/// Estimate the probability that a shot from `(x, y)` scores, in
/// [0.01, 0.95].
///
/// Symmetric in the rink half the shot was taken from, and
/// case-insensitive in `shot_type`.
pub fn estimate_xg(x: f64, y: f64, shot_type: Option<&str>) -> f64 {
    let dx = x.abs() - GOAL_LINE_X;
    let distance = (dx * dx + y * y).sqrt();
    let angle_degrees = y.atan2(GOAL_LINE_X - x.abs()).abs() * 180.0 / PI;

    let base = (BASE_PROBABILITY - distance * DISTANCE_DECAY).max(0.0);
    let angled = base * (1.0 - (angle_degrees / 90.0) * ANGLE_PENALTY);
    let multiplier = shot_type.map_or(1.0, shot_type_multiplier);

    (angled * multiplier).clamp(XG_MIN, XG_MAX)
}

fn shot_type_multiplier(shot_type: &str) -> f64 {
    SHOT_TYPE_MULTIPLIERS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(shot_type))
        .map_or(1.0, |(_, multiplier)| *multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_hold_everywhere() {
        let types = [
            None,
            Some("slap"),
            Some("tip-in"),
            Some("wrap-around"),
            Some("lacrosse"),
        ];
        let mut x = -100.0;
        while x <= 100.0 {
            let mut y = -42.5;
            while y <= 42.5 {
                for shot_type in types {
                    let xg = estimate_xg(x, y, shot_type);
                    assert!((0.01..=0.95).contains(&xg), "xg {xg} at ({x}, {y})");
                }
                y += 8.5;
            }
            x += 10.0;
        }
    }

    #[test]
    fn test_point_blank_tip_in() {
        // At the goal mouth: distance 0, angle 0, so 0.4 * 1.3 exactly.
        let xg = estimate_xg(89.0, 0.0, Some("tip-in"));
        assert!((xg - 0.52).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric_across_rink_halves() {
        let left = estimate_xg(-60.0, 12.0, Some("wrist"));
        let right = estimate_xg(60.0, 12.0, Some("wrist"));
        assert_eq!(left, right);
    }

    #[test]
    fn test_distance_decay() {
        let close = estimate_xg(80.0, 0.0, None);
        let far = estimate_xg(40.0, 0.0, None);
        assert!(close > far);
        // 9 ft out: 0.4 - 9 * 0.008, straight on.
        assert!((close - 0.328).abs() < 1e-12);
    }

    #[test]
    fn test_angle_penalty() {
        // Same distance from the goal mouth, one straight on and one from
        // a 90-degree angle along the goal line.
        let straight = estimate_xg(79.0, 0.0, None);
        let sharp = estimate_xg(89.0, 10.0, None);
        assert!((sharp - straight / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_shot_type_case_insensitive() {
        assert_eq!(
            estimate_xg(80.0, 5.0, Some("Tip-In")),
            estimate_xg(80.0, 5.0, Some("tip-in"))
        );
    }

    #[test]
    fn test_unknown_type_is_neutral() {
        assert_eq!(
            estimate_xg(80.0, 5.0, Some("spinnerama")),
            estimate_xg(80.0, 5.0, None)
        );
    }

    #[test]
    fn test_distant_shot_floors_at_min() {
        // From the far end the linear decay bottoms out at zero, which the
        // clamp lifts back to the floor.
        assert_eq!(estimate_xg(-100.0, 42.5, None), 0.01);
    }
}
