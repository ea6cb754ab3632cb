//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::Request;

/// Wrapper type for displaying the result of create operations.
///
/// Prints a confirmation line with the new ID followed by the full request.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Request> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created request with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Can carry a list of the changes made, shown above the updated request.
///
/// # Examples
///
/// ```rust
/// use desk_core::{
///     display::UpdateResult,
///     models::{Priority, Request, RequestCategory, RequestStatus},
/// };
/// use jiff::Timestamp;
///
/// let now = Timestamp::now();
/// let request = Request {
///     id: 4,
///     title: "Reimburse taxi".to_string(),
///     description: "Airport to client site".to_string(),
///     category: RequestCategory::ExpenseReimbursement,
///     priority: Priority::Low,
///     status: RequestStatus::Approved,
///     requester_name: "Mia".to_string(),
///     requester_email: "mia@x.com".to_string(),
///     department: "Sales".to_string(),
///     created_at: now,
///     updated_at: now,
///     completed_at: None,
///     assigned_to: None,
///     notes: None,
///     attachments: vec![],
/// };
///
/// let result = UpdateResult::with_changes(request, vec!["Changed status to approved".to_string()]);
/// let output = result.to_string();
/// assert!(output.contains("Updated request with ID: 4"));
/// assert!(output.contains("- Changed status to approved"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Request> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated request with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Request> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted request '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}
