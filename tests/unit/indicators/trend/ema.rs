//! Unit tests for EMA indicator

use goldwatch::indicators::trend::{calculate_ema, calculate_ema_defined, ema_recurrence};

use crate::fixtures::assert_close;

#[test]
fn test_ema_recurrence_seeded_at_first_value() {
    assert_eq!(ema_recurrence(&[1.0, 2.0, 3.0, 4.0], 3), vec![1.0, 1.5, 2.25, 3.125]);
}

#[test]
fn test_ema_undefined_before_window() {
    let ema = calculate_ema(&[1.0, 2.0, 3.0, 4.0], 3);
    assert_eq!(ema, vec![None, None, Some(2.25), Some(3.125)]);
}

#[test]
fn test_ema_insufficient_data() {
    let closes: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
    assert!(calculate_ema(&closes, 20).iter().all(Option::is_none));
}

#[test]
fn test_ema_defined_seeds_at_first_defined_value() {
    let ema = calculate_ema_defined(&[None, Some(1.0), Some(3.0), Some(3.0)], 2);
    assert_eq!(ema[0], None);
    assert_eq!(ema[1], None);
    // k = 2/3
    assert_close(ema[2], 3.0 * 2.0 / 3.0 + 1.0 / 3.0);
    assert!(ema[3].is_some());
}

#[test]
fn test_ema_defined_stops_at_gap() {
    let ema = calculate_ema_defined(&[Some(1.0), Some(2.0), None, Some(4.0)], 2);
    assert!(ema[1].is_some());
    assert_eq!(&ema[2..], &[None, None]);
}
