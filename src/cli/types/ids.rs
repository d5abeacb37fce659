//! ID types for NHL games.

use crate::error::{DashError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NHL game IDs.
///
/// Game IDs encode season, game type, and game number (e.g. `2024020001` is
/// the first regular-season game of 2024-25). Wrapping them prevents mixing
/// game IDs up with other numeric values.
///
/// # Examples
///
/// ```rust
/// use nhl_dash::GameId;
///
/// let game_id = GameId::new(2024020001);
/// assert_eq!(game_id.as_u64(), 2024020001);
/// assert_eq!(game_id.to_string(), "2024020001");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl GameId {
    /// Create a new GameId from a u64 value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying u64 value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}
