//! EMA (Exponential Moving Average) indicator

use crate::common::math;

/// Full EMA recurrence seeded at `values[0]`, one value per input.
///
/// Early values are unstable; callers that need decision-grade output use
/// [`calculate_ema`], which masks everything before `window - 1`.
pub fn ema_recurrence(values: &[f64], window: usize) -> Vec<f64> {
    let k = math::smoothing_factor(window);
    let mut out = Vec::with_capacity(values.len());

    let mut previous: Option<f64> = None;
    for &value in values {
        let next = match previous {
            Some(prev) => math::ema_from_previous(value, prev, k),
            None => value,
        };
        out.push(next);
        previous = Some(next);
    }

    out
}

/// Calculate EMA per index, `None` until `window - 1` values have been seen.
pub fn calculate_ema(values: &[f64], window: usize) -> Vec<Option<f64>> {
    ema_recurrence(values, window)
        .into_iter()
        .enumerate()
        .map(|(i, v)| (i + 1 >= window).then_some(v))
        .collect()
}

/// EMA over a partially defined source.
///
/// The recurrence is seeded at the first defined value and a result is
/// emitted once `window` defined values have been consumed. A gap after the
/// seed breaks contiguity, so everything from the gap onward is `None`.
pub fn calculate_ema_defined(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let k = math::smoothing_factor(window);
    let mut out = vec![None; values.len()];

    let mut previous: Option<f64> = None;
    let mut seen = 0usize;
    for (i, value) in values.iter().enumerate() {
        match (value, previous) {
            (Some(v), None) => {
                previous = Some(*v);
                seen = 1;
            }
            (Some(v), Some(prev)) => {
                previous = Some(math::ema_from_previous(*v, prev, k));
                seen += 1;
            }
            (None, None) => continue,
            (None, Some(_)) => break,
        }

        if seen >= window {
            out[i] = previous;
        }
    }

    out
}
