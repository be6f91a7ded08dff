//! A counter for the trailing N buckets of time.
//!
//! `TrailingCounter` maps epoch-second timestamps onto fixed-duration
//! buckets and keeps the last `num_buckets` of them in a [`BucketQueue`].
//! Both `add` and `trailing_count` first catch the queue up to `now`, so a
//! query advances the window just like a write does and never reports stale
//! buckets. `TrailingCounter::new(30, 60)` tracks the last 30 minute-sized
//! buckets of time.

use log::{debug, warn};

use crate::bucket_queue::BucketQueue;
use crate::error::{Error, Result};

pub struct TrailingCounter {
    buckets: BucketQueue,
    secs_per_bucket: u64,
    last_update_time: u64,
}

impl TrailingCounter {
    /// Creates a counter covering `num_buckets * secs_per_bucket` trailing
    /// seconds. Both parameters must be greater than zero.
    pub fn new(num_buckets: usize, secs_per_bucket: u64) -> Result<Self> {
        if secs_per_bucket == 0 {
            return Err(Error::InvalidConfig(
                "secs_per_bucket must be greater than zero".into(),
            ));
        }
        Ok(Self {
            buckets: BucketQueue::new(num_buckets)?,
            secs_per_bucket,
            last_update_time: 0,
        })
    }

    /// Records `count` events at time `now` (epoch seconds).
    pub fn add(&mut self, count: u64, now: u64) -> Result<()> {
        self.catch_up(now)?;
        self.buckets.add_to_back(count);
        Ok(())
    }

    /// Returns the total count over the trailing window ending at `now`.
    ///
    /// This is not a pure read: expired buckets are rotated out first, so
    /// the receiver is `&mut self`. Calling it again with the same `now`
    /// returns the same value.
    pub fn trailing_count(&mut self, now: u64) -> Result<u64> {
        self.catch_up(now)?;
        Ok(self.buckets.total())
    }

    /// Returns the span of the trailing window in seconds.
    #[inline]
    pub fn window_secs(&self) -> u64 {
        self.buckets.max_items() as u64 * self.secs_per_bucket
    }

    #[inline]
    pub fn secs_per_bucket(&self) -> u64 {
        self.secs_per_bucket
    }

    /// Checks that `now` does not imply a backwards shift, without touching
    /// any state. A `now` inside the same bucket as the last update implies
    /// a zero shift and passes.
    pub fn check_now(&self, now: u64) -> Result<()> {
        let current_bucket = now / self.secs_per_bucket;
        let last_update_bucket = self.last_update_time / self.secs_per_bucket;
        if current_bucket < last_update_bucket {
            return Err(Error::ClockRegression {
                now,
                last_update: self.last_update_time,
            });
        }
        Ok(())
    }

    /// Shifts the queue by however many bucket boundaries lie between the
    /// last update and `now`. Two timestamps inside the same bucket produce
    /// a zero shift.
    fn catch_up(&mut self, now: u64) -> Result<()> {
        if let Err(e) = self.check_now(now) {
            warn!(
                "rejecting update, clock moved backwards: now: {}, last update: {}",
                now, self.last_update_time
            );
            return Err(e);
        }

        let num_shifted =
            now / self.secs_per_bucket - self.last_update_time / self.secs_per_bucket;
        if num_shifted >= self.buckets.max_items() as u64 && !self.buckets.is_empty() {
            debug!(
                "idle for {} bucket slices, clearing window of {} buckets",
                num_shifted,
                self.buckets.len()
            );
        }
        self.buckets.shift(num_shifted);
        self.last_update_time = now;
        Ok(())
    }
}
