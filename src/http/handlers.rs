//! HTTP handlers for the dashboard API.
//!
//! Each handler parses its inputs, fetches through the TTL cache, and
//! assembles one DTO. Handlers are independent by design: a derivation
//! failure in one endpoint (e.g. a malformed clock breaking the flow
//! series) never affects the others.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use super::dto::{
    FlowResponse, GameMetricsResponse, HealthResponse, ScheduleResponse, ShotMapResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::analytics::rink::RinkGeometry;
use crate::cli::types::{GameId, Season, TeamAbbrev};
use crate::nhl::{fetch_club_schedule, fetch_play_by_play};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Default shot-map display box, a 200x85 rink at 4 px/ft.
const DEFAULT_DISPLAY_WIDTH: f64 = 800.0;
const DEFAULT_DISPLAY_HEIGHT: f64 = 340.0;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    pub season: Option<Season>,
}

/// GET /v1/teams/{team}/schedule?season=20242025
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(team): Path<String>,
    Query(query): Query<ScheduleQuery>,
) -> HandlerResult<ScheduleResponse> {
    let team: TeamAbbrev = team
        .parse()
        .map_err(|e: crate::DashError| AppError::BadRequest(e.to_string()))?;
    let season = query.season.unwrap_or_default();

    let (schedule, status) =
        fetch_club_schedule(&state.client, &state.cache, &team, season, false).await?;
    if schedule.games.is_empty() {
        return Err(crate::DashError::NoData.into());
    }
    info!(%team, %season, ?status, games = schedule.games.len(), "served schedule");

    Ok(Json(ScheduleResponse::from_schedule(&team, season, &schedule)))
}

/// GET /v1/games/{game_id}/metrics
pub async fn get_game_metrics(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
) -> HandlerResult<GameMetricsResponse> {
    let (pbp, status) = fetch_play_by_play(&state.client, &state.cache, game_id, false).await?;
    info!(%game_id, ?status, "served game metrics");

    Ok(Json(GameMetricsResponse::from_play_by_play(&pbp)))
}

#[derive(Debug, Deserialize)]
pub struct DisplayQuery {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// GET /v1/games/{game_id}/shots?width=800&height=340
pub async fn get_game_shots(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
    Query(query): Query<DisplayQuery>,
) -> HandlerResult<ShotMapResponse> {
    let width = query.width.unwrap_or(DEFAULT_DISPLAY_WIDTH);
    let height = query.height.unwrap_or(DEFAULT_DISPLAY_HEIGHT);
    if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
        return Err(AppError::BadRequest(
            "width and height must be positive".to_string(),
        ));
    }

    let (pbp, status) = fetch_play_by_play(&state.client, &state.cache, game_id, false).await?;
    info!(%game_id, ?status, "served shot map");

    Ok(Json(ShotMapResponse::from_play_by_play(
        &pbp,
        &RinkGeometry::default(),
        width,
        height,
    )))
}

/// GET /v1/games/{game_id}/flow
pub async fn get_game_flow(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
) -> HandlerResult<FlowResponse> {
    let (pbp, status) = fetch_play_by_play(&state.client, &state.cache, game_id, false).await?;
    info!(%game_id, ?status, "served shot flow");

    Ok(Json(FlowResponse::from_play_by_play(&pbp)?))
}
