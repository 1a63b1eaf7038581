//! Unit tests for RSI indicator

use goldwatch::indicators::momentum::{calculate_rsi, rsi_from_averages};

use crate::fixtures::assert_close;

#[test]
fn test_rsi_wilder_smoothing() {
    let rsi = calculate_rsi(&[10.0, 11.0, 10.0, 12.0], 2);
    assert_eq!(rsi[0], None);
    assert_eq!(rsi[1], None);
    assert_close(rsi[2], 50.0);
    // avg_gain = (0.5 + 2) / 2, avg_loss = (0.5 + 0) / 2, RS = 5
    assert_close(rsi[3], 100.0 - 100.0 / 6.0);
}

#[test]
fn test_rsi_no_losses_is_100() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64 * 0.5).collect();
    let rsi = calculate_rsi(&closes, 14);

    assert!(rsi[..14].iter().all(Option::is_none));
    assert!(rsi[14..].iter().all(|v| *v == Some(100.0)));
}

#[test]
fn test_rsi_no_gains_is_0() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 - i as f64).collect();
    let rsi = calculate_rsi(&closes, 14);
    assert!(rsi[14..].iter().all(|v| *v == Some(0.0)));
}

#[test]
fn test_rsi_flat_prices_is_100() {
    assert_eq!(rsi_from_averages(0.0, 0.0), 100.0);
}

#[test]
fn test_rsi_needs_more_than_window_closes() {
    let closes: Vec<f64> = (0..14).map(|i| 100.0 + i as f64).collect();
    assert!(calculate_rsi(&closes, 14).iter().all(Option::is_none));
}
