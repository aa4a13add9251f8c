//! Time Source
//!
//! The cache core takes `now` as an explicit argument. Hosts read it from a
//! [`Clock`] once per operation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Supplies the current time (block height or Unix seconds).
pub trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

// == System Clock ==
/// Wall-clock Unix seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        // Pre-epoch clocks clamp to zero
        chrono::Utc::now().timestamp().max(0) as u64
    }
}

// == Manual Clock ==
/// Settable clock, e.g. fed with block heights by an indexer or driven by tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn new(start: u64) -> Self {
        Self {
            now: AtomicU64::new(start),
        }
    }

    pub fn set(&self, now: u64) {
        self.now.store(now, Ordering::SeqCst);
    }

    /// Moves the clock forward and returns the new time.
    ///
    /// Wraps on overflow, like the underlying atomic add.
    pub fn advance(&self, by: u64) -> u64 {
        self.now.fetch_add(by, Ordering::SeqCst).wrapping_add(by)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}
