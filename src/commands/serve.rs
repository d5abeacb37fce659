//! Serve command: run the HTTP server backing the dashboard UI.

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::http::{create_router, AppState};
use crate::Result;

use super::common::CommandContext;

/// Handle the serve command. Binds `host:port` and serves until killed.
pub async fn handle_serve(host: String, port: u16, cache_ttl_secs: u64) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let ctx = CommandContext::with_cache_ttl(cache_ttl_secs)?;
    let state = AppState::new(ctx.client, ctx.cache);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    info!(%addr, cache_ttl_secs, "nhl-dash server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
