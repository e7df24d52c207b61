use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod elevenlabs;
mod error;
mod profiles;

use api::routes::{create_router, AppState};
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid address {}:{}", config.host, config.port))?;

    tracing::info!("ElevenLabs proxy v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Upstream API: {}", config.api_base);

    let configured = config.profiles.configured();
    if configured.is_empty() {
        tracing::warn!("No API key profiles configured; every request will be rejected");
    } else {
        tracing::info!("API key profiles: {}", configured.join(", "));
    }

    // Create app state
    let state = Arc::new(AppState::new(&config)?);

    // Create router
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
