use serde::{Deserialize, Serialize};

use crate::indicators::error::IndicatorError;

/// Window lengths for every indicator in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorParams {
    pub ema_fast: usize,
    pub sma_slow: usize,
    pub rsi: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            ema_fast: 20,
            sma_slow: 50,
            rsi: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
        }
    }
}

impl IndicatorParams {
    /// Reject zero-length windows; every other combination is computable.
    pub fn validate(&self) -> Result<(), IndicatorError> {
        let windows = [
            ("ema_fast", self.ema_fast),
            ("sma_slow", self.sma_slow),
            ("rsi", self.rsi),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
        ];

        match windows.into_iter().find(|(_, window)| *window == 0) {
            Some((name, _)) => Err(IndicatorError::InvalidWindow { name }),
            None => Ok(()),
        }
    }

    /// Index of the first observation whose row can be fully defined.
    pub fn first_complete_index(&self) -> usize {
        [
            self.ema_fast.saturating_sub(1),
            self.sma_slow.saturating_sub(1),
            self.rsi,
            (self.macd_slow + self.macd_signal).saturating_sub(2),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

/// Derived values for one observation. `None` means the window is not filled yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub ema_fast: Option<f64>,
    pub sma_slow: Option<f64>,
    pub rsi: Option<f64>,
    pub macd_diff: Option<f64>,
}

impl IndicatorRow {
    pub fn is_complete(&self) -> bool {
        self.ema_fast.is_some()
            && self.sma_slow.is_some()
            && self.rsi.is_some()
            && self.macd_diff.is_some()
    }
}
