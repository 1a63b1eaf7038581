//! Unit tests for the trading state classifier

use goldwatch::models::indicators::IndicatorRow;
use goldwatch::models::signal::TradingState;
use goldwatch::signals::classify;

fn row(ema_fast: Option<f64>, rsi: Option<f64>) -> IndicatorRow {
    IndicatorRow {
        ema_fast,
        rsi,
        ..IndicatorRow::default()
    }
}

#[test]
fn test_oversold_above_ema_is_buy() {
    assert_eq!(classify(&row(Some(100.0), Some(25.0)), 101.0), TradingState::Buy);
}

#[test]
fn test_overbought_below_ema_is_sell() {
    assert_eq!(classify(&row(Some(100.0), Some(75.0)), 99.0), TradingState::Sell);
}

#[test]
fn test_oversold_below_ema_is_hold() {
    assert_eq!(classify(&row(Some(100.0), Some(0.0)), 99.0), TradingState::Hold);
}

#[test]
fn test_overbought_above_ema_is_hold() {
    assert_eq!(classify(&row(Some(100.0), Some(100.0)), 101.0), TradingState::Hold);
}

#[test]
fn test_thresholds_are_strict() {
    assert_eq!(classify(&row(Some(100.0), Some(30.0)), 101.0), TradingState::Hold);
    assert_eq!(classify(&row(Some(100.0), Some(70.0)), 99.0), TradingState::Hold);
    assert_eq!(classify(&row(Some(100.0), Some(25.0)), 100.0), TradingState::Hold);
}

#[test]
fn test_missing_inputs_are_hold() {
    assert_eq!(classify(&row(None, Some(10.0)), 101.0), TradingState::Hold);
    assert_eq!(classify(&row(Some(100.0), None), 101.0), TradingState::Hold);
}

#[test]
fn test_sma_and_macd_do_not_participate() {
    let with_extras = IndicatorRow {
        ema_fast: Some(100.0),
        sma_slow: None,
        rsi: Some(25.0),
        macd_diff: Some(-50.0),
    };
    assert_eq!(classify(&with_extras, 101.0), TradingState::Buy);
}
