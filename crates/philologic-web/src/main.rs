//! PhiloLogic Web Server
//!
//! Run with: cargo run -p philologic-web

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use philologic_web::config::Config;
use philologic_web::state::{spawn_session_sweeper, AppState};

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("philologic=debug,info")),
        )
        .init();

    info!("Starting PhiloLogic Web Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    info!(
        "Configuration loaded. Catalog: {:?}, generation: {:?}",
        config.catalog.source, config.generation.backend
    );

    // Create app state
    let state = Arc::new(AppState::from_config(&config)?);
    info!(
        "Catalog source: {}, answer backend: {}, backend-written flashcards: {}",
        state.catalog.describe(),
        state.answers.name(),
        state.generator.uses_backend()
    );

    spawn_session_sweeper(state.clone(), SESSION_SWEEP_INTERVAL);

    // Build router
    let app = philologic_web::router::router_for(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
