//! Transition-edge alert dispatcher.
//!
//! Compares the latest classification with the persisted one, fires an alert
//! when the state flips into Buy or Sell, then persists the new state.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::alerts::notifier::Notifier;
use crate::error::EngineError;
use crate::models::series::PriceSeries;
use crate::models::signal::{AlertEvent, SeriesReport, TradingState};
use crate::services::market_data::SupplyError;
use crate::signals::engine::SignalEngine;
use crate::state::SignalStore;

/// Whether moving from `previous` to `current` is an alertable edge.
pub fn should_fire(previous: Option<TradingState>, current: TradingState) -> bool {
    current.is_actionable() && previous != Some(current)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FiredAlert {
    pub event: AlertEvent,
    pub delivery: Delivery,
}

/// Result of classifying the latest observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub current: TradingState,
    pub previous: Option<TradingState>,
    pub price: f64,
    pub as_of: DateTime<Utc>,
    pub alert: Option<FiredAlert>,
    pub report: SeriesReport,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// Nothing was supplied; state left untouched.
    NoSeries { reason: String },
    Evaluated(Evaluation),
}

pub struct AlertDispatcher<S, N> {
    engine: SignalEngine,
    store: S,
    notifier: N,
}

impl<S: SignalStore, N: Notifier> AlertDispatcher<S, N> {
    pub fn new(engine: SignalEngine, store: S, notifier: N) -> Self {
        Self {
            engine,
            store,
            notifier,
        }
    }

    /// Run one evaluation over whatever the supplier produced.
    ///
    /// A supply failure is recovered here: no classification, no alert and no
    /// write. Store failures abort the cycle. Notifier failures are recorded
    /// on the outcome and the new state is still persisted.
    pub async fn dispatch(
        &self,
        supplied: Result<PriceSeries, SupplyError>,
    ) -> Result<CycleOutcome, EngineError> {
        let series = match supplied {
            Ok(series) => series,
            Err(e) => {
                warn!(error = %e, "No price series available, skipping evaluation");
                return Ok(CycleOutcome::NoSeries {
                    reason: e.to_string(),
                });
            }
        };

        let warmup = self.engine.params().first_complete_index();
        if series.len() <= warmup {
            debug!(
                observations = series.len(),
                required = warmup + 1,
                "Insufficient history, indicators partly undefined"
            );
        }

        let report = self.engine.evaluate(&series);
        let latest = series.latest();
        let current = report
            .latest()
            .map(|row| row.state)
            .unwrap_or(TradingState::Hold);

        let previous = self.store.load()?.last_state;

        info!(
            current = %current,
            previous = previous.map(TradingState::as_str).unwrap_or("none"),
            close = latest.close,
            as_of = %latest.timestamp,
            "Current signal: {}, Last: {}",
            current,
            previous.map(TradingState::as_str).unwrap_or("none")
        );

        let alert = if should_fire(previous, current) {
            let event = AlertEvent {
                state: current,
                price: latest.close,
                as_of: latest.timestamp,
            };
            let delivery = match self.notifier.notify(&event).await {
                Ok(()) => {
                    info!(state = %current, "Alert delivered");
                    Delivery::Delivered
                }
                Err(e) => {
                    warn!(state = %current, error = %e, "Failed to deliver alert");
                    Delivery::Failed(e.to_string())
                }
            };
            Some(FiredAlert { event, delivery })
        } else {
            info!("No alert: signal unchanged or Hold");
            None
        };

        self.store.save(current, latest.timestamp)?;

        Ok(CycleOutcome::Evaluated(Evaluation {
            current,
            previous,
            price: latest.close,
            as_of: latest.timestamp,
            alert,
            report,
        }))
    }
}
