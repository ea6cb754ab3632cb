//! Data models for requests.
//!
//! This module contains the domain model of the request desk: the
//! [`Request`] entity, its closed enumerations, and the helper types used to
//! update, filter and tally requests. Display implementations live in
//! [`crate::display::models`] so presentation stays out of the data types.
//!
//! # Workflow
//!
//! ```text
//! pending ──▶ in_review ──▶ approved ──▶ completed
//!                  │
//!                  └──────▶ rejected
//! ```
//!
//! [`RequestStatus::next_statuses`] encodes the edges above and
//! [`TransitionPolicy`] decides whether the store holds callers to them.
//!
//! # Examples
//!
//! ```rust
//! use desk_core::models::{Priority, Request, RequestCategory, RequestStatus};
//! use jiff::Timestamp;
//!
//! let now = Timestamp::now();
//! let request = Request {
//!     id: 1,
//!     title: "Laptop".to_string(),
//!     description: "Replacement for a broken laptop".to_string(),
//!     category: RequestCategory::EquipmentRequest,
//!     priority: Priority::High,
//!     status: RequestStatus::Pending,
//! #   requester_name: "Ana".to_string(),
//! #   requester_email: "ana@x.com".to_string(),
//! #   department: "IT".to_string(),
//! #   created_at: now,
//! #   updated_at: now,
//! #   completed_at: None,
//! #   assigned_to: None,
//! #   notes: None,
//! #   attachments: vec![],
//!     // ... other fields
//! };
//! println!("{}", request); // Shows ○ Pending status icon
//! ```

pub mod category;
pub mod filters;
pub mod request;
pub mod requests;
pub mod status;
pub mod summary;


pub use category::{Priority, RequestCategory};
pub use filters::RequestFilter;
pub use request::Request;
pub use requests::UpdateRequestFields;
pub use status::{RequestStatus, TransitionPolicy};
pub use summary::DashboardStats;
