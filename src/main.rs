use anyhow::Context;
use tracing_subscriber::EnvFilter;

use sehd_api::{app, build_state, config::config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so local runs pick up JWT_KEY, DATABASE_URL, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config().clone();
    tracing::info!("Starting SEHD API in {:?} mode", config.environment);

    let port = config.server.port;
    let state = build_state(config).await.context("failed to initialize application state")?;

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("SEHD API listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
