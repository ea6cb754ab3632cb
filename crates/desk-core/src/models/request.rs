//! Request model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Priority, RequestCategory, RequestStatus};

/// A single business request tracked through the approval workflow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Request {
    /// Unique identifier, never reused within a store
    pub id: u64,

    /// Brief summary of the request
    pub title: String,

    /// Full description of what is being asked for
    pub description: String,

    pub category: RequestCategory,

    pub priority: Priority,

    /// Current stage in the workflow
    pub status: RequestStatus,

    pub requester_name: String,

    pub requester_email: String,

    pub department: String,

    /// Timestamp when the request was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp of the last mutation (UTC)
    pub updated_at: Timestamp,

    /// Set the first time the request reaches `completed`, never cleared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
}
