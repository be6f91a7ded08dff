//! Trailing minute/hour event counters over rotating time buckets.
//!
//! Answers "how much happened in the last minute / hour" in O(1) per
//! operation, whatever the event volume: counts land in fixed-duration
//! buckets and stale buckets are rotated out lazily whenever the counter is
//! touched, so an idle counter costs nothing.
//!
//! ```rust,ignore
//! let mut counter = MinuteHourCounter::new();
//! counter.add(bytes_sent)?;
//! let last_minute = counter.minute_count()?;
//! let last_hour = counter.hour_count()?;
//! ```

use serde::{Deserialize, Serialize};

pub use crate::bucket_queue::BucketQueue;
pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::error::{Error, Result};
pub use crate::minute_hour::MinuteHourCounter;
pub use crate::shared::SharedMinuteHourCounter;
pub use crate::trailing::TrailingCounter;

mod bucket_queue;
mod clock;
mod error;
pub mod global;
mod minute_hour;
mod shared;
mod trailing;

/// Window shapes for a [`MinuteHourCounter`].
///
/// The defaults match the counter's name: sixty one-second buckets for the
/// minute window and sixty one-minute buckets for the hour window. All
/// fields must be non-zero; construction fails otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub minute_buckets: usize,
    pub minute_bucket_secs: u64,
    pub hour_buckets: usize,
    pub hour_bucket_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            minute_buckets: 60,
            minute_bucket_secs: 1,
            hour_buckets: 60,
            hour_bucket_secs: 60,
        }
    }
}
