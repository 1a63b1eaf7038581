//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::trend::{calculate_ema, calculate_ema_defined};

/// Per-index MACD components, each `None` until its inputs are defined.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub line: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub diff: Vec<Option<f64>>,
}

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD, seeded at the first defined MACD value
/// Diff = MACD - Signal
pub fn calculate_macd(
    closes: &[f64],
    fast_window: usize,
    slow_window: usize,
    signal_window: usize,
) -> MacdSeries {
    let fast = calculate_ema(closes, fast_window);
    let slow = calculate_ema(closes, slow_window);

    let line: Vec<Option<f64>> = fast
        .iter()
        .zip(&slow)
        .map(|(f, s)| Some((*f)? - (*s)?))
        .collect();

    let signal = calculate_ema_defined(&line, signal_window);

    let diff = line
        .iter()
        .zip(&signal)
        .map(|(m, s)| Some((*m)? - (*s)?))
        .collect();

    MacdSeries { line, signal, diff }
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(closes: &[f64]) -> MacdSeries {
    calculate_macd(closes, 12, 26, 9)
}
