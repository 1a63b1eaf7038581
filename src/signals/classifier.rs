//! Observation-level trading state classification.

use crate::models::indicators::IndicatorRow;
use crate::models::signal::TradingState;

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// Map one observation's indicators to a trading state.
///
/// Only the fast EMA and RSI take part. Oversold RSI with price above the
/// EMA is a Buy; overbought RSI with price below the EMA is a Sell. Anything
/// else, including missing data, is a Hold.
pub fn classify(row: &IndicatorRow, close: f64) -> TradingState {
    let (Some(ema_fast), Some(rsi)) = (row.ema_fast, row.rsi) else {
        return TradingState::Hold;
    };

    if rsi < RSI_OVERSOLD && close > ema_fast {
        TradingState::Buy
    } else if rsi > RSI_OVERBOUGHT && close < ema_fast {
        TradingState::Sell
    } else {
        TradingState::Hold
    }
}
