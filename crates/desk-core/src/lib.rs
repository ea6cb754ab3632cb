//! Core library for the request desk.
//!
//! This crate provides the request state container: the [`Request`] model,
//! the approval workflow that governs its `status`, and the in-memory
//! [`RequestStore`] that owns every request for the lifetime of the process.
//! Nothing is persisted; a store starts empty and is gone when dropped.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] as
//!   markdown
//! - **Display Wrappers** ([`display`]): Collections and operation results
//! - **Terminal Rendering**: Done by the CLI's renderer
//!
//! # Quick Start
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
//! let request = store.create_request_validated(&CreateRequest {
//!     title: "Laptop".to_string(),
//!     description: "Replacement for a broken laptop".to_string(),
//!     category: RequestCategory::EquipmentRequest,
//!     priority: Priority::High,
//!     requester_name: "Ana".to_string(),
//!     requester_email: "ana@x.com".to_string(),
//!     department: "IT".to_string(),
//! })?;
//!
//! for status in [
//!     RequestStatus::InReview,
//!     RequestStatus::Approved,
//!     RequestStatus::Completed,
//! ] {
//!     store.update_status(request.id, status)?;
//! }
//!
//! let done = store.find_by_id(request.id).unwrap();
//! assert!(done.completed_at.is_some());
//! println!("{}", store.dashboard());
//! # desk_core::Result::<()>::Ok(())
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use display::{CreateResult, DeleteResult, OperationStatus, Requests, UpdateResult};
pub use error::{DeskError, Result};
pub use models::{
    DashboardStats, Priority, Request, RequestCategory, RequestFilter, RequestStatus,
    TransitionPolicy, UpdateRequestFields,
};
pub use params::{CreateRequest, Id, ListRequests, UpdateRequest, UpdateStatus};
pub use store::{Clock, ManualClock, RequestStore, StoreBuilder, StoreEvent, SystemClock};
