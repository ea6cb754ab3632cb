//! Request types for updating models.

use super::{Priority, RequestCategory, RequestStatus};

/// Partial update of a request's editable fields.
///
/// `id` and the lifecycle timestamps are not part of this type; the store
/// owns them. A `status` here goes through the same transition check as a
/// status-only update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateRequestFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<RequestCategory>,
    pub priority: Option<Priority>,
    pub status: Option<RequestStatus>,
    pub requester_name: Option<String>,
    pub requester_email: Option<String>,
    pub department: Option<String>,
    pub assigned_to: Option<String>,
    pub notes: Option<String>,
    pub attachments: Option<Vec<String>>,
}

impl UpdateRequestFields {
    /// Whether the update carries no field at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Describe each supplied field, for change summaries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use desk_core::models::{Priority, UpdateRequestFields};
    ///
    /// let update = UpdateRequestFields {
    ///     title: Some("New laptop".to_string()),
    ///     priority: Some(Priority::High),
    ///     ..Default::default()
    /// };
    /// assert_eq!(
    ///     update.change_list(),
    ///     vec!["Updated title".to_string(), "Changed priority to high".to_string()]
    /// );
    /// ```
    pub fn change_list(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if self.title.is_some() {
            changes.push("Updated title".to_string());
        }
        if self.description.is_some() {
            changes.push("Updated description".to_string());
        }
        if let Some(category) = self.category {
            changes.push(format!("Changed category to {}", category.as_str()));
        }
        if let Some(priority) = self.priority {
            changes.push(format!("Changed priority to {}", priority.as_str()));
        }
        if let Some(status) = self.status {
            changes.push(format!("Changed status to {}", status.as_str()));
        }
        if self.requester_name.is_some() || self.requester_email.is_some() {
            changes.push("Updated requester".to_string());
        }
        if self.department.is_some() {
            changes.push("Updated department".to_string());
        }
        if self.assigned_to.is_some() {
            changes.push("Updated assignee".to_string());
        }
        if self.notes.is_some() {
            changes.push("Updated notes".to_string());
        }
        if self.attachments.is_some() {
            changes.push("Updated attachments".to_string());
        }
        changes
    }
}

impl TryFrom<crate::params::UpdateRequest> for UpdateRequestFields {
    type Error = crate::DeskError;

    /// Convert string-typed update parameters into a validated field set.
    ///
    /// # Errors
    ///
    /// * `DeskError::InvalidInput` - When status, category or priority do not
    ///   parse, or a required text field is blanked
    fn try_from(params: crate::params::UpdateRequest) -> Result<Self, Self::Error> {
        let (status, category, priority) = params.validate()?;

        Ok(Self {
            title: params.title,
            description: params.description,
            category,
            priority,
            status,
            requester_name: params.requester_name,
            requester_email: params.requester_email,
            department: params.department,
            assigned_to: params.assigned_to,
            notes: params.notes,
            attachments: params.attachments,
        })
    }
}
