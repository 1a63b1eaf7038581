//! One evaluation cycle: fetch, classify, dispatch.

use backon::{ExponentialBuilder, Retryable};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::alerts::dispatcher::{AlertDispatcher, CycleOutcome};
use crate::alerts::notifier::Notifier;
use crate::config::Config;
use crate::error::EngineError;
use crate::metrics::Metrics;
use crate::models::series::PriceSeries;
use crate::services::market_data::{MarketDataProvider, SupplyError};
use crate::state::SignalStore;

/// What to fetch and how hard to try.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub symbol: String,
    pub interval: String,
    pub output_size: usize,
    /// Extra fetch attempts on transport errors; API errors are never retried.
    pub fetch_retries: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            symbol: "XAU/USD".to_string(),
            interval: "1h".to_string(),
            output_size: 500,
            fetch_retries: 3,
        }
    }
}

impl From<&Config> for RuntimeConfig {
    fn from(config: &Config) -> Self {
        Self {
            symbol: config.symbol.clone(),
            interval: config.interval.clone(),
            output_size: config.output_size,
            ..Self::default()
        }
    }
}

pub struct SignalRuntime<P, S, N> {
    config: RuntimeConfig,
    provider: P,
    dispatcher: AlertDispatcher<S, N>,
    metrics: Option<Arc<Metrics>>,
}

impl<P, S, N> SignalRuntime<P, S, N>
where
    P: MarketDataProvider,
    S: SignalStore,
    N: Notifier,
{
    pub fn new(config: RuntimeConfig, provider: P, dispatcher: AlertDispatcher<S, N>) -> Self {
        Self {
            config,
            provider,
            dispatcher,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Fetch the latest series and hand it to the dispatcher.
    pub async fn run_cycle(&self) -> Result<CycleOutcome, EngineError> {
        let supplied = self.fetch().await;
        let result = self.dispatcher.dispatch(supplied).await;

        match &result {
            Ok(outcome) => {
                if let CycleOutcome::Evaluated(evaluation) = outcome {
                    info!(
                        symbol = %self.config.symbol,
                        state = %evaluation.current,
                        alerted = evaluation.alert.is_some(),
                        "Cycle complete"
                    );
                }
                if let Some(metrics) = &self.metrics {
                    metrics.record_outcome(outcome);
                }
            }
            Err(e) => {
                error!(symbol = %self.config.symbol, error = %e, "Cycle failed");
                if let Some(metrics) = &self.metrics {
                    metrics.record_failure();
                }
            }
        }

        result
    }

    async fn fetch(&self) -> Result<PriceSeries, SupplyError> {
        let backoff = ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(500))
            .with_max_times(self.config.fetch_retries);

        (move || async move {
            self.provider
                .get_series(
                    &self.config.symbol,
                    &self.config.interval,
                    self.config.output_size,
                )
                .await
        })
        .retry(backoff)
        .when(|e: &SupplyError| matches!(e, SupplyError::Transport(_)))
        .notify(|e: &SupplyError, delay: Duration| {
            warn!(error = %e, delay_ms = delay.as_millis() as u64, "Fetch failed, retrying");
        })
        .await
    }
}
