//! Game stats command implementation

use crate::analytics::format::{format_fixed, format_percent};
use crate::cli::types::GameId;
use crate::http::dto::{GameMetricsResponse, TeamMetrics};
use crate::nhl::fetch_play_by_play;
use crate::Result;

use super::common::{print_cache_status, CommandContext};

/// Handle the game stats command: possession metrics and xG totals for
/// both sides of one game.
pub async fn handle_game_stats(
    game_id: GameId,
    as_json: bool,
    refresh: bool,
    verbose: bool,
) -> Result<()> {
    let ctx = CommandContext::new()?;

    let (pbp, status) = fetch_play_by_play(&ctx.client, &ctx.cache, game_id, refresh).await?;
    print_cache_status(
        verbose && !as_json,
        &format!("Game {} play-by-play", game_id),
        status,
    );

    let metrics = GameMetricsResponse::from_play_by_play(&pbp);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    println!(
        "Game {}: {} (home) vs {} (away)",
        metrics.game_id, metrics.home.team, metrics.away.team
    );
    print_side(&metrics.home);
    print_side(&metrics.away);

    Ok(())
}

fn print_side(side: &TeamMetrics) {
    println!(
        "{:<4} G {:>2}  SOG {:>2}  CF {:>3} ({})  FF {:>3} ({})  GF% {}  PDO {}  xG {}",
        side.team,
        side.goals,
        side.shots_on_goal,
        side.corsi,
        format_percent(side.corsi_pct),
        side.fenwick,
        format_percent(side.fenwick_pct),
        format_percent(side.goals_pct),
        format_fixed(side.pdo, 1),
        format_fixed(side.expected_goals, 2),
    );
}
