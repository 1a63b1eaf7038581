//! HTTP endpoint server using Axum

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{Json, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, Level};

use crate::core::dashboard::SeriesService;
use crate::metrics::Metrics;
use crate::models::signal::SeriesReport;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub series: Arc<SeriesService>,
}

/// Tracks whether the market data upstream answered the last report fetch.
#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
    pub last_error: Option<String>,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
            last_error: None,
        }
    }
}

impl HealthStatus {
    pub fn record_success(&mut self) {
        self.status = "healthy".to_string();
        self.last_error = None;
    }

    pub fn record_failure(&mut self, error: impl std::fmt::Display) {
        self.status = "degraded".to_string();
        self.last_error = Some(error.to_string());
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "last_error": health.last_error,
        "uptime_seconds": uptime_seconds,
        "service": "goldwatch-signal-engine"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis() as u64,
            "HTTP request error"
        );
    }

    response
}

fn upstream_error(e: impl std::fmt::Display) -> (StatusCode, Json<Value>) {
    error!(error = %e, "Failed to build series report");
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({ "error": e.to_string() })),
    )
}

async fn fetch_report(state: &AppState) -> Result<Arc<SeriesReport>, (StatusCode, Json<Value>)> {
    match state.series.report().await {
        Ok(report) => {
            state.health.write().await.record_success();
            Ok(report)
        }
        Err(e) => {
            state.health.write().await.record_failure(&e);
            Err(upstream_error(e))
        }
    }
}

/// Every observation with its indicators and trading state, oldest first
async fn get_series(State(state): State<AppState>) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let report = fetch_report(&state).await?;
    Ok(Json(json!({
        "symbol": state.series.symbol(),
        "interval": state.series.interval(),
        "rows": report.rows,
    })))
}

/// Latest observation summary
async fn get_latest(State(state): State<AppState>) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let report = fetch_report(&state).await?;
    let latest = report
        .latest()
        .ok_or_else(|| upstream_error("series report is empty"))?;

    Ok(Json(json!({
        "symbol": state.series.symbol(),
        "timestamp": latest.observation.timestamp,
        "state": latest.state,
        "close": latest.observation.close,
        "rsi": latest.indicators.rsi,
        "macd_diff": latest.indicators.macd_diff,
        "ema_fast": latest.indicators.ema_fast,
        "sma_slow": latest.indicators.sma_slow,
    })))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/series", get(get_series))
        .route("/api/latest", get(get_latest))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn_with_state(state.clone(), metrics_middleware)),
        )
        .with_state(state)
}
