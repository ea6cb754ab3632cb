//! In-memory request store.
//!
//! This module provides the [`RequestStore`], the sole owner of the request
//! collection and the only component allowed to mutate it. Presenters read
//! snapshots from it and send commands back; nothing else holds requests.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │   Collection    │
//! │ (validated      │───▶│ (create,        │───▶│ Vec<Request>,   │
//! │  params)        │    │  update, ...)   │    │ newest first    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Interface input        Lifecycle rules        Session state
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`RequestStore`] instances with configuration
//! - [`request_ops`]: Lifecycle operations on the collection
//! - [`request_handlers`]: String-typed parameter handling on top of the operations
//! - [`clock`]: Time source for lifecycle timestamps
//! - [`events`]: Change notifications for subscribers
//!
//! ## Lookup misses
//!
//! Updates and deletes against an unknown id change nothing and report the
//! miss as `None`, never as an error. Presenters may hold stale ids; the
//! store does not punish them for it.
//!
//! # Usage Examples
//!
//! ```rust
//! use desk_core::{
//!     StoreBuilder,
//!     models::{Priority, RequestCategory, RequestStatus},
//!     params::CreateRequest,
//! };
//!
//! let mut store = StoreBuilder::new().build();
//!
//! let request = store.create(&CreateRequest {
//!     title: "Laptop".to_string(),
//!     description: "Replacement for a broken laptop".to_string(),
//!     category: RequestCategory::EquipmentRequest,
//!     priority: Priority::High,
//!     requester_name: "Ana".to_string(),
//!     requester_email: "ana@x.com".to_string(),
//!     department: "IT".to_string(),
//! });
//! assert_eq!(request.status, RequestStatus::Pending);
//!
//! let reviewed = store.update_status(request.id, RequestStatus::InReview)?;
//! assert_eq!(reviewed.map(|r| r.status), Some(RequestStatus::InReview));
//!
//! // Unknown ids are a no-op
//! assert!(store.update_status(999, RequestStatus::Approved)?.is_none());
//! # desk_core::Result::<()>::Ok(())
//! ```

use tokio::sync::broadcast;

use crate::models::{Request, TransitionPolicy};

pub mod builder;
pub mod clock;
pub mod events;
pub mod request_handlers;
pub mod request_ops;

#[cfg(test)]
mod tests;

pub use builder::StoreBuilder;
pub use clock::{Clock, ManualClock, SystemClock};
pub use events::StoreEvent;

/// Owner of the request collection.
pub struct RequestStore {
    /// Newest first
    pub(crate) requests: Vec<Request>,
    pub(crate) next_id: u64,
    pub(crate) policy: TransitionPolicy,
    pub(crate) clock: Box<dyn Clock>,
    pub(crate) events: broadcast::Sender<StoreEvent>,
}

impl RequestStore {
    pub(crate) fn new(
        policy: TransitionPolicy,
        clock: Box<dyn Clock>,
        event_capacity: usize,
    ) -> Self {
        let (events, _) = broadcast::channel(event_capacity);
        Self {
            requests: Vec::new(),
            next_id: 1,
            policy,
            clock,
            events,
        }
    }

    /// Transition policy the store was built with.
    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }
}

impl Default for RequestStore {
    fn default() -> Self {
        StoreBuilder::new().build()
    }
}

impl std::fmt::Debug for RequestStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestStore")
            .field("requests", &self.requests.len())
            .field("next_id", &self.next_id)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
