//! Per-observation indicator rows for a whole price series.

use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::trend::{calculate_ema, calculate_sma};
use crate::models::indicators::{IndicatorParams, IndicatorRow};
use crate::models::series::PriceSeries;

/// Computes EMA, SMA, RSI and MACD-diff for every observation.
///
/// Every value at index `i` depends only on closes `0..=i`, so recomputing
/// over an unchanged prefix yields identical rows.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorPipeline {
    params: IndicatorParams,
}

impl IndicatorPipeline {
    pub fn new(params: IndicatorParams) -> Result<Self, IndicatorError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &IndicatorParams {
        &self.params
    }

    /// One row per observation, same order and length as the series.
    pub fn compute(&self, series: &PriceSeries) -> Vec<IndicatorRow> {
        let closes = series.closes();
        let p = &self.params;

        let ema_fast = calculate_ema(&closes, p.ema_fast);
        let sma_slow = calculate_sma(&closes, p.sma_slow);
        let rsi = calculate_rsi(&closes, p.rsi);
        let macd = calculate_macd(&closes, p.macd_fast, p.macd_slow, p.macd_signal);

        (0..closes.len())
            .map(|i| IndicatorRow {
                ema_fast: ema_fast[i],
                sma_slow: sma_slow[i],
                rsi: rsi[i],
                macd_diff: macd.diff[i],
            })
            .collect()
    }
}

impl Default for IndicatorPipeline {
    fn default() -> Self {
        Self {
            params: IndicatorParams::default(),
        }
    }
}
