//! Schedule command implementation

use crate::cli::types::{Season, TeamAbbrev};
use crate::http::dto::ScheduleResponse;
use crate::nhl::fetch_club_schedule;
use crate::Result;

use super::common::{print_cache_status, CommandContext};
use super::resolve_team;

/// Handle the schedule command: list the team's games for a season.
pub async fn handle_schedule(
    team: Option<TeamAbbrev>,
    season: Season,
    as_json: bool,
    refresh: bool,
) -> Result<()> {
    let team = resolve_team(team)?;
    let ctx = CommandContext::new()?;

    let (schedule, status) =
        fetch_club_schedule(&ctx.client, &ctx.cache, &team, season, refresh).await?;
    print_cache_status(!as_json, &format!("{} {} schedule", team, season), status);

    let response = ScheduleResponse::from_schedule(&team, season, &schedule);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    for game in &response.games {
        let score = match (game.home_score, game.away_score) {
            (Some(home), Some(away)) => format!("{}-{}", away, home),
            _ => "--".to_string(),
        };
        println!(
            "{}  {:>10}  {} @ {}  {:>5}  {}",
            game.game_id,
            game.date,
            game.away,
            game.home,
            score,
            game.state.as_deref().unwrap_or("")
        );
    }
    println!("{} games", response.games.len());

    Ok(())
}
