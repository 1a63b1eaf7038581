//! Cron-based scheduler that runs evaluation cycles one at a time

use cron::Schedule;
use std::future::Future;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("scheduler disabled: interval_seconds is 0")]
    Disabled,
    #[error("interval of {0}s has no evenly spaced cron schedule")]
    UnsupportedInterval(u64),
    #[error("invalid cron expression '{expr}': {reason}")]
    InvalidCron { expr: String, reason: String },
}

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Convert an interval to a six-field cron expression (sec min hour dom month dow).
///
/// The step must divide the enclosing field evenly: seconds into a minute,
/// minutes into an hour, hours into a day.
pub fn cron_expression(interval_seconds: u64) -> Result<String, SchedulerError> {
    let unsupported = || SchedulerError::UnsupportedInterval(interval_seconds);

    match interval_seconds {
        0 => Err(SchedulerError::Disabled),
        DAY => Ok("0 0 0 * * *".to_string()),
        s if s < MINUTE => {
            if MINUTE % s == 0 {
                Ok(format!("*/{} * * * * *", s))
            } else {
                Err(unsupported())
            }
        }
        s if s < HOUR && s % MINUTE == 0 && HOUR % s == 0 => {
            Ok(format!("0 */{} * * * *", s / MINUTE))
        }
        s if s < DAY && s % HOUR == 0 && DAY % s == 0 => Ok(format!("0 0 */{} * * *", s / HOUR)),
        _ => Err(unsupported()),
    }
}

/// Awaits each cron tick, then runs the cycle to completion before waiting
/// for the next one, so at most one cycle touches the state store at a time.
pub struct CycleScheduler {
    schedule: Schedule,
}

impl CycleScheduler {
    pub fn new(interval_seconds: u64) -> Result<Self, SchedulerError> {
        let expr = cron_expression(interval_seconds)?;
        let schedule = Schedule::from_str(&expr).map_err(|e| SchedulerError::InvalidCron {
            expr: expr.clone(),
            reason: e.to_string(),
        })?;

        info!(
            interval = interval_seconds,
            cron = %expr,
            "CycleScheduler: created with interval {}s (cron: {})",
            interval_seconds,
            expr
        );

        Ok(Self { schedule })
    }

    /// Time until the next tick, or `None` if the schedule has no more ticks.
    pub fn next_delay(&self) -> Option<Duration> {
        let next_tick = self.schedule.upcoming(chrono::Utc).next()?;
        let now = chrono::Utc::now();
        Some((next_tick - now).to_std().unwrap_or_default())
    }

    /// Run `cycle` on every tick until `shutdown` resolves.
    ///
    /// Shutdown is only observed while waiting, never in the middle of a cycle.
    pub async fn run<F, Fut, S>(&self, mut cycle: F, shutdown: S)
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ()>,
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            let Some(delay) = self.next_delay() else {
                info!("CycleScheduler: schedule exhausted");
                return;
            };

            tokio::select! {
                _ = &mut shutdown => {
                    info!("CycleScheduler: stopped");
                    return;
                }
                _ = tokio::time::sleep(delay) => {}
            }

            cycle().await;
        }
    }
}
