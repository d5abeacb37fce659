//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::DashError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Resource not found
    NotFound(String),
    /// The upstream API failed or returned something unusable
    Upstream(String),
    /// Internal server error
    Internal(String),
}

impl From<DashError> for AppError {
    fn from(err: DashError) -> Self {
        match err {
            DashError::NoData => AppError::NotFound(err.to_string()),
            DashError::Http(ref inner)
                if inner.status() == Some(reqwest::StatusCode::NOT_FOUND) =>
            {
                AppError::NotFound("no such game or team upstream".to_string())
            }
            // A clock that fails to parse means the upstream payload was
            // malformed, same bucket as a failed fetch or decode.
            DashError::Http(_) | DashError::Json(_) | DashError::InvalidClockTime { .. } => {
                AppError::Upstream(err.to_string())
            }
            DashError::InvalidTeam { .. } | DashError::InvalidGameId(_) => {
                AppError::BadRequest(err.to_string())
            }
            _ => AppError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::Upstream(msg) => (
                StatusCode::BAD_GATEWAY,
                ApiError::new("UPSTREAM_ERROR", msg),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}
