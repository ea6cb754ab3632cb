//! Time source for lifecycle timestamps.

use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

use jiff::Timestamp;

/// Source of "now" for the store.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same instant, so a test can keep a handle after giving
/// one to the store.
///
/// # Examples
///
/// ```rust
/// use desk_core::store::{Clock, ManualClock};
///
/// let clock = ManualClock::at_second(1_700_000_000);
/// let handle = clock.clone();
/// handle.advance_seconds(60);
/// assert_eq!(clock.now().as_second(), 1_700_000_060);
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    nanos: Arc<AtomicI64>,
}

impl ManualClock {
    /// Clock frozen at the given Unix second.
    pub fn at_second(second: i64) -> Self {
        Self {
            nanos: Arc::new(AtomicI64::new(second.saturating_mul(1_000_000_000))),
        }
    }

    pub fn advance_seconds(&self, seconds: i64) {
        self.nanos
            .fetch_add(seconds.saturating_mul(1_000_000_000), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        let nanos = self.nanos.load(Ordering::SeqCst);
        Timestamp::from_nanosecond(i128::from(nanos)).unwrap_or(Timestamp::UNIX_EPOCH)
    }
}
