//! Unit tests for the indicator pipeline

use goldwatch::indicators::{IndicatorError, IndicatorPipeline};
use goldwatch::models::indicators::IndicatorParams;

use crate::fixtures::{buy_closes, hourly_series};

#[test]
fn test_one_row_per_observation() {
    let series = hourly_series(&buy_closes());
    let rows = IndicatorPipeline::default().compute(&series);
    assert_eq!(rows.len(), series.len());
}

#[test]
fn test_definition_indices_with_default_params() {
    let series = hourly_series(&buy_closes());
    let rows = IndicatorPipeline::default().compute(&series);

    assert!(rows[18].ema_fast.is_none());
    assert!(rows[19].ema_fast.is_some());
    assert!(rows[13].rsi.is_none());
    assert!(rows[14].rsi.is_some());
    assert!(rows[48].sma_slow.is_none());
    assert!(rows[49].sma_slow.is_some());
    assert!(rows[32].macd_diff.is_none());
    assert!(rows[33].macd_diff.is_some());

    let first_complete = IndicatorParams::default().first_complete_index();
    assert_eq!(first_complete, 49);
    assert!(!rows[first_complete - 1].is_complete());
    assert!(rows[first_complete].is_complete());
}

#[test]
fn test_prefix_values_do_not_depend_on_later_data() {
    let closes = buy_closes();
    let full = IndicatorPipeline::default().compute(&hourly_series(&closes));
    let prefix = IndicatorPipeline::default().compute(&hourly_series(&closes[..55]));

    assert_eq!(&full[..55], &prefix[..]);
}

#[test]
fn test_zero_window_rejected() {
    let params = IndicatorParams {
        rsi: 0,
        ..IndicatorParams::default()
    };
    assert_eq!(
        IndicatorPipeline::new(params).unwrap_err(),
        IndicatorError::InvalidWindow { name: "rsi" }
    );
}
