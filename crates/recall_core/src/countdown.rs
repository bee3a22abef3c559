//! One-second countdown driver.
//!
//! The timer owns no thread and no callback. The shell asks it how long to
//! wait and how many periods have elapsed, then feeds that many ticks into
//! the session. Dropping the timer cancels it.

use std::time::{Duration, Instant};
use tracing::{instrument, trace};

/// Repeating deadline tracker for the display countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownTimer {
    next_tick: Instant,
    period: Duration,
}

impl CountdownTimer {
    /// Interval between ticks.
    pub const PERIOD: Duration = Duration::from_secs(1);

    /// Arms a timer whose first tick is due one period after `now`.
    #[instrument]
    pub fn armed(now: Instant) -> Self {
        Self::with_period(now, Self::PERIOD)
    }

    /// Arms a timer with a custom period. Zero is raised to one millisecond.
    pub fn with_period(now: Instant, period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            next_tick: now + period,
            period,
        }
    }

    /// Returns how many whole periods have elapsed since the last poll.
    ///
    /// Each counted period is consumed, so a second poll at the same instant
    /// returns zero.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut ticks = 0;
        while now >= self.next_tick {
            ticks += 1;
            self.next_tick += self.period;
        }
        if ticks > 0 {
            trace!(ticks, "Countdown periods elapsed");
        }
        ticks
    }

    /// Time left until the next tick is due. Zero when one is already due.
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }
}
