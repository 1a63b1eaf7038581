//! Unit tests for the cycle scheduler

use cron::Schedule;
use goldwatch::core::scheduler::{cron_expression, CycleScheduler, SchedulerError};
use std::str::FromStr;
use std::time::Duration;

fn tick_gaps(expr: &str, count: usize) -> Vec<i64> {
    let schedule = Schedule::from_str(expr).unwrap();
    let ticks: Vec<_> = schedule.upcoming(chrono::Utc).take(count + 1).collect();
    ticks
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_seconds())
        .collect()
}

#[test]
fn test_cron_expression_by_interval() {
    assert_eq!(cron_expression(30).unwrap(), "*/30 * * * * *");
    assert_eq!(cron_expression(300).unwrap(), "0 */5 * * * *");
    assert_eq!(cron_expression(3600).unwrap(), "0 0 */1 * * *");
    assert_eq!(cron_expression(21600).unwrap(), "0 0 */6 * * *");
}

#[test]
fn test_daily_interval_fires_once_a_day() {
    let expr = cron_expression(86400).unwrap();
    assert_eq!(expr, "0 0 0 * * *");
    assert_eq!(tick_gaps(&expr, 3), vec![86400; 3]);
}

#[test]
fn test_supported_intervals_tick_evenly() {
    for interval in [1u64, 15, 30, 60, 120, 900, 1800, 3600, 7200, 28800, 43200, 86400] {
        let expr = cron_expression(interval).unwrap();
        assert_eq!(
            tick_gaps(&expr, 4),
            vec![interval as i64; 4],
            "interval {interval}s via '{expr}'"
        );
    }
}

#[test]
fn test_uneven_intervals_rejected() {
    for interval in [45u64, 90, 420, 5400, 18000, 90000] {
        assert!(
            matches!(
                CycleScheduler::new(interval),
                Err(SchedulerError::UnsupportedInterval(i)) if i == interval
            ),
            "interval {interval}s should be rejected"
        );
    }
}

#[test]
fn test_zero_interval_disabled() {
    assert!(matches!(CycleScheduler::new(0), Err(SchedulerError::Disabled)));
}

#[test]
fn test_next_delay_within_interval() {
    let scheduler = CycleScheduler::new(300).unwrap();
    let delay = scheduler.next_delay().unwrap();
    assert!(delay <= Duration::from_secs(300));
}

#[tokio::test]
async fn test_shutdown_stops_before_any_cycle() {
    let scheduler = CycleScheduler::new(3600).unwrap();
    let mut cycles = 0;

    scheduler
        .run(
            || {
                cycles += 1;
                async {}
            },
            async {},
        )
        .await;

    assert_eq!(cycles, 0);
}
