// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::weather_service::WeatherService;
use crate::infrastructure::config::{load_app_config, INFLUX_URL};
use crate::infrastructure::influx_repository::InfluxRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration once; it is immutable from here on
    let config = load_app_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(InfluxRepository::new(
        INFLUX_URL.to_string(),
        config.influx.org,
        config.influx.token,
    ));

    // Create services (application layer)
    let weather_service = WeatherService::new(repository, config.influx.bucket);

    // Build router (presentation layer)
    let router = build_router(Arc::new(AppState { weather_service }));

    // Start server
    let addr: SocketAddr = config.gateway.listen.parse()?;
    tracing::info!("Starting weather-gateway on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
