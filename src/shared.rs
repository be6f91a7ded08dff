use std::sync::{Arc, Mutex};

use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::minute_hour::MinuteHourCounter;
use crate::Config;

/// A cloneable handle to a counter shared between threads.
///
/// Every operation, queries included, rotates buckets, so the whole counter
/// sits behind one mutex; there is no finer-grained locking that keeps the
/// running total consistent with the buckets.
pub struct SharedMinuteHourCounter<C = SystemClock> {
    inner: Arc<Mutex<MinuteHourCounter<C>>>,
}

impl<C> Clone for SharedMinuteHourCounter<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl SharedMinuteHourCounter<SystemClock> {
    pub fn new() -> Self {
        Self::from_counter(MinuteHourCounter::new())
    }
}

impl Default for SharedMinuteHourCounter<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SharedMinuteHourCounter<C> {
    pub fn with_clock(clock: C) -> Self {
        Self::from_counter(MinuteHourCounter::with_clock(clock))
    }

    pub fn with_config(cfg: Config, clock: C) -> Result<Self> {
        Ok(Self::from_counter(MinuteHourCounter::with_config(
            cfg, clock,
        )?))
    }

    fn from_counter(counter: MinuteHourCounter<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(counter)),
        }
    }

    pub fn add(&self, count: u64) -> Result<()> {
        self.locked()?.add(count)
    }

    pub fn minute_count(&self) -> Result<u64> {
        self.locked()?.minute_count()
    }

    pub fn hour_count(&self) -> Result<u64> {
        self.locked()?.hour_count()
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, MinuteHourCounter<C>>> {
        self.inner
            .lock()
            .map_err(|_| Error::from("counter mutex poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    #[test]
    fn clones_share_one_counter() {
        let clock = ManualClock::new(100);
        let counter = SharedMinuteHourCounter::with_clock(clock.clone());
        let other = counter.clone();

        counter.add(3).unwrap();
        other.add(4).unwrap();
        assert_eq!(counter.minute_count().unwrap(), 7);
        assert_eq!(other.hour_count().unwrap(), 7);
    }

    #[test]
    fn concurrent_adds_are_all_counted() {
        let clock = ManualClock::new(1_000);
        let counter = SharedMinuteHourCounter::with_clock(clock);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counter = counter.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        counter.add(1).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counter.minute_count().unwrap(), 800);
        assert_eq!(counter.hour_count().unwrap(), 800);
    }
}
