//! Error types for the NHL dashboard backend

use thiserror::Error;


pub type Result<T> = std::result::Result<T, DashError>;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Team not provided and {env_var} environment variable not set")]
    MissingTeam { env_var: String },

    #[error("Invalid team abbreviation: {team}")]
    InvalidTeam { team: String },

    #[error("Failed to parse game ID: {0}")]
    InvalidGameId(#[from] std::num::ParseIntError),

    #[error("Invalid clock time '{raw}': expected MM:SS")]
    InvalidClockTime { raw: String },

    #[error("NHL API returned no data")]
    NoData,
}
