//! Goldwatch API Server
//!
//! Serves the indicator series, trading states, health and metrics for
//! dashboards. Read-only: never touches the persisted signal state.

use dotenvy::dotenv;
use goldwatch::config::Config;
use goldwatch::core::dashboard::SeriesService;
use goldwatch::core::http::{create_router, AppState, HealthStatus};
use goldwatch::logging;
use goldwatch::metrics::Metrics;
use goldwatch::services::market_data::MarketDataProvider;
use goldwatch::services::twelvedata::TwelveDataProvider;
use goldwatch::signals::engine::SignalEngine;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env()?;
    info!("Starting Goldwatch API Server");
    info!(environment = %goldwatch::config::get_environment(), port = config.port, "Environment");

    let provider: Arc<dyn MarketDataProvider> = Arc::new(TwelveDataProvider::with_base_url(
        &config.twelve_data_base_url,
        config.require_api_key()?,
    ));
    let series = SeriesService::new(
        provider,
        SignalEngine::new(config.indicators)?,
        &config.symbol,
        &config.interval,
        config.output_size,
    )
    .with_ttl(Duration::from_secs(config.series_cache_seconds));

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics: Arc::new(Metrics::new()?),
        start_time: Arc::new(Instant::now()),
        series: Arc::new(series),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "HTTP server listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down API server...");
        })
        .await?;

    Ok(())
}
