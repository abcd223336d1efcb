use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use travel_server::config::AppConfig;
use travel_server::web::{AppState, create_router};

const DEFAULT_LOG_FILTER: &str = "travel_server=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = AppConfig::from_env()?;

    // Opening and seeding the database is blocking work
    let startup = config.clone();
    let state = tokio::task::spawn_blocking(move || AppState::bootstrap(&startup)).await??;

    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "Travel Planner listening on http://{}", config.addr);
    info!("API endpoints:");
    info!("  GET    /api/cities              - List cities");
    info!("  GET    /api/requests            - List travel requests");
    info!("  POST   /api/requests            - Create a travel request");
    info!("  DELETE /api/requests/:id        - Delete a travel request");
    info!("  POST   /api/requests/:id/plan   - Plan a stored request");
    info!("  POST   /api/plan                - Plan without storing");

    axum::serve(listener, app).await?;
    Ok(())
}
