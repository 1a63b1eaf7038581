//! SMA (Simple Moving Average) indicator

use crate::common::math;

/// Trailing arithmetic mean per index, `None` while fewer than `window` values exist.
pub fn calculate_sma(values: &[f64], window: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| {
            if window == 0 || i + 1 < window {
                return None;
            }
            math::mean(&values[i + 1 - window..=i])
        })
        .collect()
}
