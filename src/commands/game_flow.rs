//! Game flow command implementation

use crate::cli::types::GameId;
use crate::http::dto::FlowResponse;
use crate::nhl::fetch_play_by_play;
use crate::Result;

use super::common::{print_cache_status, CommandContext};

/// Handle the flow command: the running shot-attempt differential for one
/// game, in chronological order.
pub async fn handle_game_flow(game_id: GameId, as_json: bool, refresh: bool) -> Result<()> {
    let ctx = CommandContext::new()?;

    let (pbp, status) = fetch_play_by_play(&ctx.client, &ctx.cache, game_id, refresh).await?;
    print_cache_status(
        !as_json,
        &format!("Game {} play-by-play", game_id),
        status,
    );

    let flow = FlowResponse::from_play_by_play(&pbp)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&flow)?);
        return Ok(());
    }

    for point in &flow.points {
        println!(
            "P{} {:>5}  {:<13}  home {:>3}  away {:>3}  diff {:>+3}",
            point.period,
            point.time,
            point.kind,
            point.home_running_count,
            point.away_running_count,
            point.differential,
        );
    }
    println!("{} shot attempts", flow.points.len());

    Ok(())
}
