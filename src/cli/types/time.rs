//! Season type for NHL schedule queries.

use crate::error::{DashError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NHL season identifiers in the API's eight-digit
/// form, start year followed by end year (e.g. `20242025`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u32);

impl Season {
    pub fn new(season: u32) -> Self {
        Self(season)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(20252026)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_parse_and_display() {
        let season: Season = "20242025".parse().unwrap();
        assert_eq!(season.as_u32(), 20242025);
        assert_eq!(season.to_string(), "20242025");
    }

    #[test]
    fn test_season_default() {
        assert_eq!(Season::default().as_u32(), 20252026);
    }
}
