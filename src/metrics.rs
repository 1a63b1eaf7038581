//! Prometheus metrics for evaluation cycles and the HTTP API.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

use crate::alerts::dispatcher::{CycleOutcome, Delivery};
use crate::models::signal::TradingState;

pub struct Metrics {
    registry: Registry,
    pub cycles_total: IntCounterVec,
    pub alerts_total: IntCounterVec,
    pub alert_delivery_failures_total: IntCounter,
    /// 1 for Buy, -1 for Sell, 0 for Hold.
    pub current_state: IntGauge,
    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: IntGauge,
    pub http_request_duration_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let cycles_total = IntCounterVec::new(
            Opts::new("evaluation_cycles_total", "Evaluation cycles by outcome"),
            &["outcome"],
        )?;
        let alerts_total = IntCounterVec::new(
            Opts::new("alerts_fired_total", "Alerts fired by trading state"),
            &["state"],
        )?;
        let alert_delivery_failures_total = IntCounter::new(
            "alert_delivery_failures_total",
            "Alerts the notifier failed to deliver",
        )?;
        let current_state = IntGauge::new(
            "current_trading_state",
            "Latest classified state (1 Buy, -1 Sell, 0 Hold)",
        )?;
        let http_requests_total =
            IntCounter::new("http_requests_total", "Total HTTP requests served")?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently in flight")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;

        registry.register(Box::new(cycles_total.clone()))?;
        registry.register(Box::new(alerts_total.clone()))?;
        registry.register(Box::new(alert_delivery_failures_total.clone()))?;
        registry.register(Box::new(current_state.clone()))?;
        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            cycles_total,
            alerts_total,
            alert_delivery_failures_total,
            current_state,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
        })
    }

    pub fn record_outcome(&self, outcome: &CycleOutcome) {
        match outcome {
            CycleOutcome::NoSeries { .. } => {
                self.cycles_total.with_label_values(&["no_series"]).inc();
            }
            CycleOutcome::Evaluated(evaluation) => {
                self.cycles_total.with_label_values(&["evaluated"]).inc();
                self.current_state.set(match evaluation.current {
                    TradingState::Buy => 1,
                    TradingState::Sell => -1,
                    TradingState::Hold => 0,
                });

                if let Some(alert) = &evaluation.alert {
                    self.alerts_total
                        .with_label_values(&[alert.event.state.as_str()])
                        .inc();
                    if matches!(alert.delivery, Delivery::Failed(_)) {
                        self.alert_delivery_failures_total.inc();
                    }
                }
            }
        }
    }

    pub fn record_failure(&self) {
        self.cycles_total.with_label_values(&["failed"]).inc();
    }

    /// Render the registry in the Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
