// Wall-clock source for status computation: a periodic tick, aligned to
// interval boundaries, delivered to the App as `Action::ClockTicked`.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDateTime, NaiveTime, Timelike};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::action::Action;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(60);

// tokio::time::interval panics on a zero period.
const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Anything that can tell the current local wall-clock time.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// System local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalTime;

impl TimeSource for LocalTime {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant. Used for deterministic rendering.
#[derive(Debug, Clone, Copy)]
pub struct FixedTime(pub NaiveDateTime);

impl TimeSource for FixedTime {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Time left until the next multiple of `interval`, counted from midnight.
/// At an exact boundary this is a full interval, never zero.
pub fn until_next_boundary(time: NaiveTime, interval: Duration) -> Duration {
    let interval_ms = interval.as_millis();
    if interval_ms == 0 {
        return Duration::ZERO;
    }
    // Leap-second nanos can exceed one second; clamp them.
    let millis = u128::from(time.nanosecond().min(999_999_999) / 1_000_000);
    let since_midnight = u128::from(time.num_seconds_from_midnight()) * 1000 + millis;
    let remaining = interval_ms - since_midnight % interval_ms;
    Duration::from_millis(u64::try_from(remaining).unwrap_or(u64::MAX))
}

/// Handle to the ticking task. Dropping it cancels the timer.
pub struct Clock {
    task: JoinHandle<()>,
}

impl Clock {
    /// Start ticking: one tick immediately, the next at the following interval
    /// boundary, then every `interval`. Stops on its own once the receiver is gone.
    pub fn spawn(
        interval: Duration,
        source: Arc<dyn TimeSource>,
        tx: UnboundedSender<Action>,
    ) -> Self {
        let interval = interval.max(MIN_TICK_INTERVAL);
        tracing::debug!(interval_ms = interval.as_millis() as u64, "starting clock");

        let task = tokio::spawn(async move {
            let first = source.now();
            if tx.send(Action::ClockTicked(first)).is_err() {
                return;
            }

            let start = tokio::time::Instant::now() + until_next_boundary(first.time(), interval);
            let mut ticker = tokio::time::interval_at(start, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if tx.send(Action::ClockTicked(source.now())).is_err() {
                    break;
                }
            }
        });

        Self { task }
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.task.abort();
    }
}
