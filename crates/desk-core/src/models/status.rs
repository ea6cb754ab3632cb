//! Status enumeration and workflow transitions for requests.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of request statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Submitted, nobody has looked at it yet
    #[default]
    Pending,

    /// Someone is reviewing the request
    InReview,

    /// Accepted, waiting to be carried out
    Approved,

    /// Turned down
    Rejected,

    /// Carried out
    Completed,
}

/// How strictly the store checks status changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// Only edges of the workflow are accepted
    #[default]
    Enforced,

    /// Any status may be written over any other
    Permissive,
}

impl RequestStatus {
    /// All statuses in workflow order.
    pub const ALL: [RequestStatus; 5] = [
        RequestStatus::Pending,
        RequestStatus::InReview,
        RequestStatus::Approved,
        RequestStatus::Rejected,
        RequestStatus::Completed,
    ];

    /// Convert to the wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::InReview => "in_review",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Completed => "completed",
        }
    }

    /// Statuses reachable from this one in a single step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use desk_core::models::RequestStatus;
    ///
    /// assert_eq!(
    ///     RequestStatus::InReview.next_statuses(),
    ///     &[RequestStatus::Approved, RequestStatus::Rejected]
    /// );
    /// assert!(RequestStatus::Completed.next_statuses().is_empty());
    /// ```
    pub fn next_statuses(&self) -> &'static [RequestStatus] {
        match self {
            RequestStatus::Pending => &[RequestStatus::InReview],
            RequestStatus::InReview => &[RequestStatus::Approved, RequestStatus::Rejected],
            RequestStatus::Approved => &[RequestStatus::Completed],
            RequestStatus::Rejected | RequestStatus::Completed => &[],
        }
    }

    /// Whether `next` is a workflow edge out of this status.
    pub fn can_transition_to(&self, next: RequestStatus) -> bool {
        self.next_statuses().contains(&next)
    }

    /// Whether no workflow edge leaves this status.
    pub fn is_terminal(&self) -> bool {
        self.next_statuses().is_empty()
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use desk_core::models::RequestStatus;
    ///
    /// assert_eq!(RequestStatus::Pending.with_icon(), "○ Pending");
    /// assert_eq!(RequestStatus::Completed.with_icon(), "✓ Completed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "○ Pending",
            RequestStatus::InReview => "➤ In Review",
            RequestStatus::Approved => "✔ Approved",
            RequestStatus::Rejected => "✗ Rejected",
            RequestStatus::Completed => "✓ Completed",
        }
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "in_review" | "inreview" | "in-review" => Ok(RequestStatus::InReview),
            "approved" => Ok(RequestStatus::Approved),
            "rejected" => Ok(RequestStatus::Rejected),
            "completed" => Ok(RequestStatus::Completed),
            _ => Err(format!("Invalid request status: {s}")),
        }
    }
}

impl TransitionPolicy {
    /// Whether the policy lets a request move from `from` to `to`.
    pub fn allows(&self, from: RequestStatus, to: RequestStatus) -> bool {
        match self {
            TransitionPolicy::Enforced => from.can_transition_to(to),
            TransitionPolicy::Permissive => true,
        }
    }
}
