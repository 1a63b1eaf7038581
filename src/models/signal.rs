use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::indicators::IndicatorRow;
use crate::models::series::Observation;

/// Discrete recommendation for one observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradingState {
    Buy,
    Sell,
    Hold,
}

impl TradingState {
    /// Buy and Sell are the only states worth telling anyone about.
    pub fn is_actionable(self) -> bool {
        matches!(self, TradingState::Buy | TradingState::Sell)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TradingState::Buy => "Buy",
            TradingState::Sell => "Sell",
            TradingState::Hold => "Hold",
        }
    }
}

impl fmt::Display for TradingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown trading state `{0}`")]
pub struct ParseTradingStateError(pub String);

impl FromStr for TradingState {
    type Err = ParseTradingStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Buy" => Ok(TradingState::Buy),
            "Sell" => Ok(TradingState::Sell),
            "Hold" => Ok(TradingState::Hold),
            other => Err(ParseTradingStateError(other.to_string())),
        }
    }
}

/// Last classified state as it survives between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalRecord {
    pub last_state: Option<TradingState>,
    pub as_of: Option<DateTime<Utc>>,
}

impl SignalRecord {
    pub fn new(state: TradingState, as_of: DateTime<Utc>) -> Self {
        Self {
            last_state: Some(state),
            as_of: Some(as_of),
        }
    }
}

/// Payload handed to the notifier when the state flips to Buy or Sell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertEvent {
    pub state: TradingState,
    pub price: f64,
    pub as_of: DateTime<Utc>,
}

/// One observation with its indicators and classification, for display consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedRow {
    #[serde(flatten)]
    pub observation: Observation,
    #[serde(flatten)]
    pub indicators: IndicatorRow,
    pub state: TradingState,
}

/// Full per-observation output of a pipeline run, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesReport {
    pub rows: Vec<AnnotatedRow>,
}

impl SeriesReport {
    pub fn latest(&self) -> Option<&AnnotatedRow> {
        self.rows.last()
    }

    pub fn states(&self) -> Vec<TradingState> {
        self.rows.iter().map(|r| r.state).collect()
    }
}
