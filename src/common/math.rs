//! Numeric helpers shared by the indicator implementations.

/// EMA smoothing factor `2 / (window + 1)`.
pub fn smoothing_factor(window: usize) -> f64 {
    2.0 / (window as f64 + 1.0)
}

/// One step of the EMA recurrence.
pub fn ema_from_previous(value: f64, previous: f64, k: f64) -> f64 {
    value * k + previous * (1.0 - k)
}

/// Wilder smoothing step: `(previous * (window - 1) + value) / window`.
pub fn wilder_from_previous(value: f64, previous: f64, window: usize) -> f64 {
    (previous * (window as f64 - 1.0) + value) / window as f64
}

/// Arithmetic mean of a slice; `None` when empty.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
