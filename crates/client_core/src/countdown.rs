//! Countdown to the event start.

use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::{
    clock::Clock,
    error::{CoreError, Result},
};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1_000);

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeRemaining {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Floors into display units. Non-positive deltas are zero.
    pub fn from_delta_millis(delta_ms: i64) -> Self {
        if delta_ms <= 0 {
            return Self::ZERO;
        }
        let delta = delta_ms as u64;
        Self {
            days: delta / MILLIS_PER_DAY,
            hours: (delta / MILLIS_PER_HOUR) % 24,
            minutes: (delta / MILLIS_PER_MINUTE) % 60,
            seconds: (delta / MILLIS_PER_SECOND) % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn as_millis(&self) -> u64 {
        self.days * MILLIS_PER_DAY
            + self.hours * MILLIS_PER_HOUR
            + self.minutes * MILLIS_PER_MINUTE
            + self.seconds * MILLIS_PER_SECOND
    }

    pub fn units(&self) -> [(&'static str, u64); 4] {
        [
            ("days", self.days),
            ("hours", self.hours),
            ("minutes", self.minutes),
            ("seconds", self.seconds),
        ]
    }
}

pub fn time_remaining(now: DateTime<Utc>, target: DateTime<Utc>) -> TimeRemaining {
    TimeRemaining::from_delta_millis((target - now).num_milliseconds())
}

/// Must be started inside a tokio runtime. Dropping the ticker aborts the task.
pub struct CountdownTicker {
    clock: Arc<dyn Clock>,
    target: DateTime<Utc>,
    task: Option<JoinHandle<()>>,
    updates: watch::Receiver<TimeRemaining>,
}

impl CountdownTicker {
    pub fn start(
        clock: Arc<dyn Clock>,
        target: DateTime<Utc>,
        interval: Duration,
    ) -> Result<Self> {
        if interval.is_zero() {
            return Err(CoreError::ZeroTickInterval);
        }

        let initial = time_remaining(clock.now(), target);
        let (tx, updates) = watch::channel(initial);
        let task_clock = Arc::clone(&clock);
        let task = tokio::spawn(async move {
            let mut ticks = time::interval(interval);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick resolves immediately; the initial value is already published.
            ticks.tick().await;
            loop {
                ticks.tick().await;
                let remaining = time_remaining(task_clock.now(), target);
                if tx.send(remaining).is_err() {
                    debug!("countdown: all receivers dropped");
                    break;
                }
            }
        });

        info!(
            target_at = %target,
            interval_ms = interval.as_millis() as u64,
            "countdown: ticker started"
        );

        Ok(Self {
            clock,
            target,
            task: Some(task),
            updates,
        })
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    pub fn current(&self) -> TimeRemaining {
        *self.updates.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<TimeRemaining> {
        self.updates.clone()
    }

    // A zero display can still be up to a second early.
    pub fn target_reached(&self) -> bool {
        self.clock.now() >= self.target
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            info!(target_at = %self.target, "countdown: ticker stopped");
        }
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "tests/countdown_tests.rs"]
mod tests;
