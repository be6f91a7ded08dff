//! Minute/hour composition over two trailing counters.
//!
//! Tracks the cumulative count over the past minute and over the past hour,
//! e.g. recent bandwidth usage or request volume. One wall-clock read per
//! `add` is fanned out to both windows so they always advance to the same
//! instant.

use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::trailing::TrailingCounter;
use crate::Config;

pub struct MinuteHourCounter<C = SystemClock> {
    minute: TrailingCounter,
    hour: TrailingCounter,
    clock: C,
}

impl MinuteHourCounter<SystemClock> {
    /// Creates a counter over the real wall clock with the default
    /// 60 x 1s minute window and 60 x 60s hour window.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for MinuteHourCounter<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> MinuteHourCounter<C> {
    pub fn with_clock(clock: C) -> Self {
        match Self::with_config(Config::default(), clock) {
            Ok(counter) => counter,
            // The default config has non-zero bucket counts and durations.
            Err(_) => unreachable!("default config must be valid"),
        }
    }

    pub fn with_config(cfg: Config, clock: C) -> Result<Self> {
        Ok(Self {
            minute: TrailingCounter::new(cfg.minute_buckets, cfg.minute_bucket_secs)?,
            hour: TrailingCounter::new(cfg.hour_buckets, cfg.hour_bucket_secs)?,
            clock,
        })
    }

    /// Records `count` events at the current time in both windows.
    pub fn add(&mut self, count: u64) -> Result<()> {
        let now = self.clock.now();
        // A backwards clock must reject before either window moves; which
        // window notices depends on bucket granularity, so check both up
        // front.
        self.minute.check_now(now)?;
        self.hour.check_now(now)?;
        self.minute.add(count, now)?;
        self.hour.add(count, now)
    }

    /// Returns the accumulated count over the past 60 seconds.
    ///
    /// Rotates expired buckets out first, hence `&mut self`.
    pub fn minute_count(&mut self) -> Result<u64> {
        let now = self.clock.now();
        self.minute.trailing_count(now)
    }

    /// Returns the accumulated count over the past 3600 seconds.
    ///
    /// Rotates expired buckets out first, hence `&mut self`.
    pub fn hour_count(&mut self) -> Result<u64> {
        let now = self.clock.now();
        self.hour.trailing_count(now)
    }
}
