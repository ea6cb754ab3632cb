//! Builder for creating and configuring RequestStore instances.

use super::{Clock, RequestStore, SystemClock};
use crate::models::TransitionPolicy;

/// Default number of undelivered events kept per subscriber.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Builder for creating and configuring RequestStore instances.
pub struct StoreBuilder {
    policy: TransitionPolicy,
    clock: Option<Box<dyn Clock>>,
    event_capacity: usize,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            policy: TransitionPolicy::default(),
            clock: None,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }

    /// Sets how strictly status changes are checked.
    ///
    /// Defaults to [`TransitionPolicy::Enforced`].
    pub fn with_transition_policy(mut self, policy: TransitionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the time source for lifecycle timestamps.
    ///
    /// If not specified, uses the system clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Sets how many events a slow subscriber may fall behind before it
    /// starts missing them. Zero is raised to one.
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity.max(1);
        self
    }

    /// Builds the configured store. The collection starts empty.
    pub fn build(self) -> RequestStore {
        let clock = self.clock.unwrap_or_else(|| Box::new(SystemClock));
        RequestStore::new(self.policy, clock, self.event_capacity)
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
