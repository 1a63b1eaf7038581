//! RSI (Relative Strength Index) indicator

use crate::common::math;

/// RSI from smoothed averages.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// No losses at all pins the value at 100.
pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Calculate Wilder's RSI per index over close-to-close changes.
///
/// The first average is the simple mean of the first `window` changes, so
/// the first defined value sits at index `window`.
pub fn calculate_rsi(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if window == 0 || closes.len() <= window {
        return out;
    }

    let (gains, losses): (Vec<f64>, Vec<f64>) = closes
        .windows(2)
        .map(|pair| {
            let change = pair[1] - pair[0];
            if change > 0.0 {
                (change, 0.0)
            } else {
                (0.0, -change)
            }
        })
        .unzip();

    // gains[j] is the change into closes[j + 1]
    let mut avg_gain = math::mean(&gains[..window]).unwrap_or(0.0);
    let mut avg_loss = math::mean(&losses[..window]).unwrap_or(0.0);
    out[window] = Some(rsi_from_averages(avg_gain, avg_loss));

    for i in (window + 1)..closes.len() {
        avg_gain = math::wilder_from_previous(gains[i - 1], avg_gain, window);
        avg_loss = math::wilder_from_previous(losses[i - 1], avg_loss, window);
        out[i] = Some(rsi_from_averages(avg_gain, avg_loss));
    }

    out
}
