//! Rink coordinate geometry and game-clock conversions.
//!
//! The NHL feed reports shot locations in feet, centered at the rink's
//! center dot: x in [-100, 100] along the long axis, y in [-42.5, 42.5].
//! Everything here is closed-form arithmetic over those coordinates.

use crate::error::{DashError, Result};

/// Regulation period length in seconds.
pub const PERIOD_SECONDS: u32 = 1200;

/// Extents of the rink coordinate space. Configuration, not runtime data:
/// construct it once (usually via `Default`) and reuse it for every mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RinkGeometry {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for RinkGeometry {
    /// Standard NHL rink: 200 ft x 85 ft, origin at center ice.
    fn default() -> Self {
        Self {
            x_min: -100.0,
            x_max: 100.0,
            y_min: -42.5,
            y_max: 42.5,
        }
    }
}

impl RinkGeometry {
    /// Affine map from rink feet onto a display surface of `width` x
    /// `height` units, top-left origin.
    ///
    /// Total: out-of-range input simply lands outside the nominal display
    /// box rather than failing.
    pub fn to_display(&self, x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
        let dx = (x - self.x_min) / (self.x_max - self.x_min) * width;
        let dy = (y - self.y_min) / (self.y_max - self.y_min) * height;
        (dx, dy)
    }
}

/// Reflect shots from the defensive half (x < 0) through center ice so both
/// halves of the rink overlay onto one common attacking half.
///
/// Idempotent on already-normalized points; x = 0 maps to itself.
pub fn normalize_to_attacking_half(x: f64, y: f64) -> (f64, f64) {
    if x < 0.0 {
        (-x, -y)
    } else {
        (x, y)
    }
}

/// Convert a "MM:SS" elapsed-in-period clock plus a 1-based period number
/// into game-elapsed seconds, assuming fixed 20-minute periods.
pub fn time_to_absolute_seconds(clock_time: &str, period: u32) -> Result<u32> {
    let invalid = || DashError::InvalidClockTime {
        raw: clock_time.to_string(),
    };

    let (minutes, seconds) = clock_time.split_once(':').ok_or_else(invalid)?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    let seconds: u32 = seconds.parse().map_err(|_| invalid())?;

    Ok(period.saturating_sub(1) * PERIOD_SECONDS + minutes * 60 + seconds)
}

/// Format a seconds count as a zero-padded "MM:SS" clock string.
///
/// This is the left inverse of `time_to_absolute_seconds` only for
/// within-period offsets: it does not subtract out the period component, so
/// feeding it a game-elapsed total from period 2 onward yields minute values
/// of 20 and above. Callers that want a within-period clock must take the
/// offset themselves before formatting.
pub fn seconds_to_clock(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_display_corners() {
        let rink = RinkGeometry::default();
        assert_eq!(rink.to_display(-100.0, -42.5, 800.0, 340.0), (0.0, 0.0));
        assert_eq!(rink.to_display(100.0, 42.5, 800.0, 340.0), (800.0, 340.0));
        assert_eq!(rink.to_display(0.0, 0.0, 800.0, 340.0), (400.0, 170.0));
    }

    #[test]
    fn test_to_display_out_of_range_maps_outside_box() {
        let rink = RinkGeometry::default();
        let (dx, dy) = rink.to_display(120.0, 50.0, 800.0, 340.0);
        assert!(dx > 800.0);
        assert!(dy > 340.0);
    }

    #[test]
    fn test_normalize_reflects_defensive_half() {
        assert_eq!(normalize_to_attacking_half(-50.0, 10.0), (50.0, -10.0));
        assert_eq!(normalize_to_attacking_half(-1.0, -42.5), (1.0, 42.5));
    }

    #[test]
    fn test_normalize_leaves_attacking_half_alone() {
        assert_eq!(normalize_to_attacking_half(50.0, 10.0), (50.0, 10.0));
    }

    #[test]
    fn test_normalize_boundary_x_zero() {
        // x = 0 sits on the reflection axis and must map to itself even
        // with a nonzero y.
        assert_eq!(normalize_to_attacking_half(0.0, 15.0), (0.0, 15.0));
        assert_eq!(normalize_to_attacking_half(0.0, -15.0), (0.0, -15.0));
    }

    #[test]
    fn test_normalize_idempotent() {
        for &(x, y) in &[(-88.0, 20.0), (0.0, -5.0), (33.3, 41.0)] {
            let (x1, y1) = normalize_to_attacking_half(x, y);
            assert!(x1 >= 0.0);
            assert_eq!(normalize_to_attacking_half(x1, y1), (x1, y1));
        }
    }

    #[test]
    fn test_time_to_absolute_seconds() {
        assert_eq!(time_to_absolute_seconds("00:00", 1).unwrap(), 0);
        assert_eq!(time_to_absolute_seconds("05:30", 1).unwrap(), 330);
        assert_eq!(time_to_absolute_seconds("00:00", 2).unwrap(), 1200);
        assert_eq!(time_to_absolute_seconds("12:01", 3).unwrap(), 3121);
    }

    #[test]
    fn test_time_to_absolute_seconds_malformed() {
        for raw in ["", "1234", "ab:cd", "12:xx", "-1:00", "1:2:3"] {
            let result = time_to_absolute_seconds(raw, 1);
            assert!(
                matches!(result, Err(DashError::InvalidClockTime { .. })),
                "expected parse failure for {raw:?}"
            );
        }
    }

    #[test]
    fn test_seconds_to_clock_zero_padding() {
        assert_eq!(seconds_to_clock(0), "00:00");
        assert_eq!(seconds_to_clock(65), "01:05");
        assert_eq!(seconds_to_clock(599), "09:59");
    }

    #[test]
    fn test_seconds_to_clock_keeps_period_offset() {
        // Deliberately not a round trip with time_to_absolute_seconds: the
        // formatter never subtracts period offsets.
        let abs = time_to_absolute_seconds("05:00", 2).unwrap();
        assert_eq!(seconds_to_clock(abs), "25:00");
    }
}
