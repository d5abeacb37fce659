//! Team abbreviation type.

use crate::error::{DashError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Three-letter NHL team abbreviation (e.g. `TOR`, `NYR`, `VGK`).
///
/// Parsing upper-cases the input and rejects anything that is not exactly
/// three ASCII letters, so a `TeamAbbrev` is always in the form the NHL API
/// expects in URL path segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamAbbrev(String);

impl TeamAbbrev {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamAbbrev {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamAbbrev {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_uppercase()))
        } else {
            Err(DashError::InvalidTeam {
                team: s.to_string(),
            })
        }
    }
}
