//! A fixed-capacity queue of time-bucket accumulators.
//!
//! `BucketQueue` holds up to `max_items` consecutive, equal-length time
//! slices, oldest at the front. Advancing the window (`shift`) pushes fresh
//! zero buckets onto the back and drops the oldest off the front; the
//! running total is maintained incrementally so `total()` is O(1) no matter
//! how many events have been recorded.
//!
//! ## Example
//! ```rust,ignore
//! let mut q = BucketQueue::new(60)?;
//! q.add_to_back(5); // record 5 events in the current slice
//! q.shift(3);       // three slices pass
//! let total = q.total(); // still 5, the bucket has not fallen off yet
//! ```

use std::collections::VecDeque;

use crate::error::{Error, Result};

pub struct BucketQueue {
    q: VecDeque<u64>,
    max_items: usize,
    total: u64,
}

impl BucketQueue {
    /// Creates an empty queue holding at most `max_items` buckets.
    pub fn new(max_items: usize) -> Result<Self> {
        if max_items == 0 {
            return Err(Error::InvalidConfig(
                "bucket queue capacity must be greater than zero".into(),
            ));
        }
        Ok(Self {
            q: VecDeque::with_capacity(max_items),
            max_items,
            total: 0,
        })
    }

    /// Advances the window by `num_shifted` bucket slices.
    ///
    /// Fresh buckets start at zero; buckets pushed past the front are
    /// evicted and subtracted from the running total. Shifting by the full
    /// capacity or more clears the queue outright, so an arbitrarily long
    /// idle gap costs O(1).
    pub fn shift(&mut self, num_shifted: u64) {
        if num_shifted >= self.max_items as u64 {
            self.q.clear();
            self.total = 0;
            return;
        }

        for _ in 0..num_shifted {
            self.q.push_back(0);
        }

        while self.q.len() > self.max_items {
            if let Some(evicted) = self.q.pop_front() {
                self.total -= evicted;
            }
        }
    }

    /// Adds `count` to the newest bucket.
    ///
    /// An empty queue first shifts once to establish the current slice.
    #[inline]
    pub fn add_to_back(&mut self, count: u64) {
        if self.q.is_empty() {
            self.shift(1);
        }
        if let Some(back) = self.q.back_mut() {
            *back += count;
        }
        self.total += count;
    }

    /// Returns the sum of all retained buckets.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the number of buckets currently retained.
    #[inline]
    pub fn len(&self) -> usize {
        self.q.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }

    /// Returns the maximum number of buckets this queue retains.
    #[inline]
    pub fn max_items(&self) -> usize {
        self.max_items
    }
}
