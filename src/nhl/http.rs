//! Raw endpoint calls against the NHL api-web API.

use reqwest::Client;
use serde_json::Value;

use crate::cli::types::{GameId, Season, TeamAbbrev};
use crate::Result;

/// Base path for the public NHL stats API.
pub const API_BASE_URL: &str = "https://api-web.nhle.com/v1";

/// Full play-by-play feed for one game.
pub async fn get_play_by_play(client: &Client, game_id: GameId) -> Result<Value> {
    let url = format!("{API_BASE_URL}/gamecenter/{}/play-by-play", game_id);

    let res = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(res)
}

/// A club's full-season schedule.
pub async fn get_club_schedule(
    client: &Client,
    team: &TeamAbbrev,
    season: Season,
) -> Result<Value> {
    let url = format!("{API_BASE_URL}/club-schedule-season/{}/{}", team, season);

    let res = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(res)
}
