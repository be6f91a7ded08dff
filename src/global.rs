//! A process-wide counter for callers that want one shared tally without
//! threading a handle through every call site.

use once_cell::sync::Lazy;

use crate::error::Result;
use crate::shared::SharedMinuteHourCounter;

static GLOBAL_COUNTER: Lazy<SharedMinuteHourCounter> = Lazy::new(SharedMinuteHourCounter::new);

/// Records `count` events against the process-wide counter.
pub fn add(count: u64) -> Result<()> {
    GLOBAL_COUNTER.add(count)
}

/// Total recorded against the process-wide counter in the past minute.
pub fn minute_count() -> Result<u64> {
    GLOBAL_COUNTER.minute_count()
}

/// Total recorded against the process-wide counter in the past hour.
pub fn hour_count() -> Result<u64> {
    GLOBAL_COUNTER.hour_count()
}

#[cfg(test)]
mod tests {
    // The global counter reads the real wall clock, so tests stick to
    // coarse assertions that hold regardless of timing.
    #[test]
    fn global_counter_accumulates() {
        super::add(5).unwrap();
        super::add(2).unwrap();
        let minute = super::minute_count().unwrap();
        let hour = super::hour_count().unwrap();
        assert!(minute >= 7);
        assert!(hour >= minute);
    }
}
