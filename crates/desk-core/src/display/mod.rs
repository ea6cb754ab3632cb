//! Display formatting for requests and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for collections and operation outcomes so
//! every interface formats the same data the same way.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (Request, ...)  │───▶│ (Requests,      │───▶│     Output      │
//! │                 │    │  CreateResult)  │    │ (Terminal/MCP)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper type ([`Requests`])
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use desk_core::{
//!     display::{CreateResult, OperationStatus},
//!     models::{Priority, Request, RequestCategory, RequestStatus},
//! };
//! use jiff::Timestamp;
//!
//! let now = Timestamp::now();
//! let request = Request {
//!     id: 1,
//!     title: "Printer on floor 2".to_string(),
//!     description: "Paper jam every morning".to_string(),
//!     category: RequestCategory::FacilityMaintenance,
//!     priority: Priority::Medium,
//!     status: RequestStatus::Pending,
//!     requester_name: "Luis".to_string(),
//!     requester_email: "luis@x.com".to_string(),
//!     department: "Operations".to_string(),
//!     created_at: now,
//!     updated_at: now,
//!     completed_at: None,
//!     assigned_to: None,
//!     notes: None,
//!     attachments: vec![],
//! };
//!
//! let output = CreateResult::new(request).to_string();
//! assert!(output.contains("Created request with ID: 1"));
//!
//! let status = OperationStatus::failure("Request with ID 9 not found".to_string());
//! assert!(status.to_string().starts_with("Error:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Requests;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
