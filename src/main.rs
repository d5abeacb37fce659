//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nhl_dash::{
    cli::{Commands, GetCmd, NhlDash},
    commands::{
        game_flow::handle_game_flow, game_stats::handle_game_stats, schedule::handle_schedule,
        serve::handle_serve,
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = NhlDash::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Schedule {
                team,
                season,
                json,
                refresh,
            } => handle_schedule(team, season, json, refresh).await?,

            GetCmd::GameStats {
                game_id,
                json,
                refresh,
                verbose,
            } => handle_game_stats(game_id, json, refresh, verbose).await?,

            GetCmd::Flow {
                game_id,
                json,
                refresh,
            } => handle_game_flow(game_id, json, refresh).await?,
        },

        Commands::Serve {
            host,
            port,
            cache_ttl,
        } => handle_serve(host, port, cache_ttl).await?,
    }

    Ok(())
}
