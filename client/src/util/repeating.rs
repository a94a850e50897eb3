//! Cancellable fixed-rate repeating task.
//!
//! Wraps a browser interval timer in a handle that stops the timer on
//! `stop()` or drop. Off the browser the timer never fires; only the
//! immediate tick of `start_immediate` runs.

#[cfg(test)]
#[path = "repeating_test.rs"]
mod repeating_test;

use std::time::Duration;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;

/// Handle to a running interval. Dropping it cancels the interval.
#[derive(Debug)]
pub struct RepeatingTask {
    period: Duration,
    running: bool,
    #[cfg(feature = "hydrate")]
    interval: Option<Interval>,
}

impl RepeatingTask {
    /// Run `tick` every `period`, first firing one period from now.
    pub fn start(period: Duration, tick: impl FnMut() + 'static) -> Self {
        #[cfg(feature = "hydrate")]
        {
            let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX).max(1);
            Self {
                period,
                running: true,
                interval: Some(Interval::new(millis, tick)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = tick;
            Self { period, running: true }
        }
    }

    /// Run `tick` once now, then every `period`.
    pub fn start_immediate(period: Duration, mut tick: impl FnMut() + 'static) -> Self {
        tick();
        Self::start(period, tick)
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Cancel the interval. Safe to call more than once.
    pub fn stop(&mut self) {
        // Dropping the gloo handle clears the browser interval.
        #[cfg(feature = "hydrate")]
        {
            self.interval = None;
        }
        self.running = false;
    }
}

impl Drop for RepeatingTask {
    fn drop(&mut self) {
        self.stop();
    }
}
