//! Cached, read-only indicator reports for display consumers.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::signal::SeriesReport;
use crate::services::market_data::{MarketDataProvider, SupplyError};
use crate::signals::engine::SignalEngine;

/// Fetches and evaluates the series on demand, reusing the last report
/// until it is older than the TTL. Never reads or writes signal state.
pub struct SeriesService {
    provider: Arc<dyn MarketDataProvider>,
    engine: SignalEngine,
    symbol: String,
    interval: String,
    output_size: usize,
    ttl: Duration,
    cache: RwLock<Option<(Instant, Arc<SeriesReport>)>>,
}

impl SeriesService {
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        engine: SignalEngine,
        symbol: impl Into<String>,
        interval: impl Into<String>,
        output_size: usize,
    ) -> Self {
        Self {
            provider,
            engine,
            symbol: symbol.into(),
            interval: interval.into(),
            output_size,
            ttl: Duration::from_secs(3600),
            cache: RwLock::new(None),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn interval(&self) -> &str {
        &self.interval
    }

    pub async fn report(&self) -> Result<Arc<SeriesReport>, SupplyError> {
        {
            let cache = self.cache.read().await;
            if let Some((fetched_at, report)) = cache.as_ref() {
                if fetched_at.elapsed() < self.ttl {
                    debug!(symbol = %self.symbol, "Serving cached series report");
                    return Ok(report.clone());
                }
            }
        }

        let series = self
            .provider
            .get_series(&self.symbol, &self.interval, self.output_size)
            .await?;
        let report = Arc::new(self.engine.evaluate(&series));

        let mut cache = self.cache.write().await;
        *cache = Some((Instant::now(), report.clone()));
        Ok(report)
    }
}
