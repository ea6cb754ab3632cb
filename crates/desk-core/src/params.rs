//! Parameter structures for request desk operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (session runner, MCP, etc.) without framework-specific
//! derives or dependencies. Interface layers wrap these types, add their own
//! derives (clap, schemars) and convert into them with `.into()`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Session Args   │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Status, category and priority travel as strings in the update and list
//! parameters, as they arrive from the outside, and are parsed by the
//! `validate` methods. [`CreateRequest`] is the form payload; its
//! [`CreateRequest::validate`] performs the checks the submission form owns
//! before the store is ever called.

use std::{str::FromStr, sync::LazyLock};

use regex::Regex;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    DeskError, Result,
    models::{Priority, RequestCategory, RequestStatus},
};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Parse a string field into one of the closed enumerations, naming the
/// field in the error.
pub(crate) fn parse_field<T>(field: &str, raw: &str) -> Result<T>
where
    T: FromStr<Err = String>,
{
    T::from_str(raw).map_err(|reason| DeskError::invalid_input(field).with_reason(reason))
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DeskError::invalid_input(field).with_reason("must not be empty"));
    }
    Ok(())
}

fn require_email(value: &str) -> Result<()> {
    if !EMAIL_PATTERN.is_match(value.trim()) {
        return Err(DeskError::invalid_input("requester_email")
            .with_reason(format!("'{value}' is not a valid email address")));
    }
    Ok(())
}

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_request and delete_request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the request to operate on
    pub id: u64,
}

/// Parameters for submitting a new request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateRequest {
    /// Brief summary of the request
    pub title: String,
    /// Full description of what is being asked for
    pub description: String,
    /// Kind of request
    pub category: RequestCategory,
    /// Urgency of the request
    pub priority: Priority,
    /// Full name of the person submitting
    pub requester_name: String,
    /// Contact email of the person submitting
    pub requester_email: String,
    /// Department the requester belongs to
    pub department: String,
}

impl CreateRequest {
    /// Check the submission the way the intake form does.
    ///
    /// # Errors
    ///
    /// * `DeskError::InvalidInput` - When a required text field is blank
    /// * `DeskError::InvalidInput` - When the email does not look like one
    ///
    /// # Examples
    ///
    /// ```rust
    /// use desk_core::{
    ///     models::{Priority, RequestCategory},
    ///     params::CreateRequest,
    /// };
    ///
    /// let mut params = CreateRequest {
    ///     title: "Laptop".to_string(),
    ///     description: "Broken screen".to_string(),
    ///     category: RequestCategory::EquipmentRequest,
    ///     priority: Priority::High,
    ///     requester_name: "Ana".to_string(),
    ///     requester_email: "ana@x.com".to_string(),
    ///     department: "IT".to_string(),
    /// };
    /// assert!(params.validate().is_ok());
    ///
    /// params.requester_email = "ana-at-x".to_string();
    /// assert!(params.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        require_text("title", &self.title)?;
        require_text("description", &self.description)?;
        require_text("requester_name", &self.requester_name)?;
        require_text("requester_email", &self.requester_email)?;
        require_email(&self.requester_email)?;
        require_text("department", &self.department)?;
        Ok(())
    }
}

/// Parameters for moving a request to another status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateStatus {
    /// Request ID to update
    pub id: u64,
    /// Target status ('pending', 'in_review', 'approved', 'rejected' or
    /// 'completed')
    pub status: String,
}

impl UpdateStatus {
    /// Parse the target status.
    ///
    /// # Errors
    ///
    /// * `DeskError::InvalidInput` - When the status string is invalid
    pub fn validate(&self) -> Result<RequestStatus> {
        parse_field("status", &self.status)
    }
}

/// Parameters for a partial update of an existing request.
///
/// Every field left out keeps its current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateRequest {
    /// Request ID to update (required)
    pub id: u64,
    pub title: Option<String>,
    pub description: Option<String>,
    /// New category (e.g. 'it_support')
    pub category: Option<String>,
    /// New priority ('low', 'medium' or 'high')
    pub priority: Option<String>,
    /// New status, checked against the workflow like a status update
    pub status: Option<String>,
    pub requester_name: Option<String>,
    pub requester_email: Option<String>,
    pub department: Option<String>,
    /// Person the request is assigned to
    pub assigned_to: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Attachment references
    pub attachments: Option<Vec<String>>,
}

impl UpdateRequest {
    /// Validate update parameters and return the parsed enumerations as
    /// `(status, category, priority)`.
    ///
    /// Text fields that are part of the submission form may be replaced but
    /// not blanked, and a replacement email must still look like one.
    ///
    /// # Errors
    ///
    /// * `DeskError::InvalidInput` - When status, category or priority are
    ///   invalid, or a required text field is blank
    pub fn validate(
        &self,
    ) -> Result<(
        Option<RequestStatus>,
        Option<RequestCategory>,
        Option<Priority>,
    )> {
        let required_text = [
            ("title", &self.title),
            ("description", &self.description),
            ("requester_name", &self.requester_name),
            ("requester_email", &self.requester_email),
            ("department", &self.department),
        ];
        for (field, value) in required_text {
            if let Some(value) = value {
                require_text(field, value)?;
            }
        }
        if let Some(email) = &self.requester_email {
            require_email(email)?;
        }

        let status = self
            .status
            .as_deref()
            .map(|raw| parse_field("status", raw))
            .transpose()?;
        let category = self
            .category
            .as_deref()
            .map(|raw| parse_field("category", raw))
            .transpose()?;
        let priority = self
            .priority
            .as_deref()
            .map(|raw| parse_field("priority", raw))
            .transpose()?;

        Ok((status, category, priority))
    }
}

/// Parameters for listing requests.
///
/// All criteria are optional; `status = "all"` is accepted as "no status
/// filter".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListRequests {
    /// Only requests in this status ('all' for every status)
    #[serde(default)]
    pub status: Option<String>,
    /// Only requests of this category
    #[serde(default)]
    pub category: Option<String>,
    /// Only requests with this priority
    #[serde(default)]
    pub priority: Option<String>,
    /// Only requests from this department
    #[serde(default)]
    pub department: Option<String>,
    /// Case-insensitive search in request titles
    #[serde(default)]
    pub search: Option<String>,
}
