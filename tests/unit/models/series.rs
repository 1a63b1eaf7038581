//! Unit tests for price series construction

use chrono::Duration;
use goldwatch::models::series::{Observation, PriceSeries, SeriesError};

use crate::fixtures::start_time;

fn bar(hour: i64, close: f64) -> Observation {
    Observation::new(start_time() + Duration::hours(hour), close, close, close, close)
}

#[test]
fn test_empty_series_rejected() {
    assert_eq!(PriceSeries::new(vec![]), Err(SeriesError::Empty));
}

#[test]
fn test_non_increasing_timestamps_rejected() {
    let result = PriceSeries::new(vec![bar(0, 1.0), bar(2, 2.0), bar(1, 3.0)]);
    assert!(matches!(result, Err(SeriesError::NotIncreasing { index: 2, .. })));

    let duplicate = PriceSeries::new(vec![bar(0, 1.0), bar(0, 2.0)]);
    assert!(matches!(duplicate, Err(SeriesError::NotIncreasing { index: 1, .. })));
}

#[test]
fn test_from_unordered_sorts_and_dedupes() {
    let series =
        PriceSeries::from_unordered(vec![bar(2, 3.0), bar(0, 1.0), bar(1, 2.0), bar(2, 4.0)])
            .unwrap();

    assert_eq!(series.closes(), vec![1.0, 2.0, 4.0]);
    assert_eq!(series.latest().close, 4.0);
}
