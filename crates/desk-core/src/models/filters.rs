//! Filter types for listing requests.

use super::{Priority, Request, RequestCategory, RequestStatus};

/// Filter options for listing requests.
///
/// Every criterion left as `None` matches everything, so the default filter
/// is the "all statuses" view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestFilter {
    /// Filter by exact status
    pub status: Option<RequestStatus>,

    /// Filter by category
    pub category: Option<RequestCategory>,

    /// Filter by priority
    pub priority: Option<Priority>,

    /// Filter by department (case-insensitive exact match)
    pub department: Option<String>,

    /// Filter by title (case-insensitive partial match)
    pub title_contains: Option<String>,
}

impl RequestFilter {
    /// Filter that keeps only requests in the given status.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use desk_core::models::{RequestFilter, RequestStatus};
    ///
    /// let filter = RequestFilter::for_status(RequestStatus::Pending);
    /// assert_eq!(filter.status, Some(RequestStatus::Pending));
    /// assert!(filter.category.is_none());
    /// ```
    pub fn for_status(status: RequestStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Whether the request passes every criterion of this filter.
    pub fn matches(&self, request: &Request) -> bool {
        if self.status.is_some_and(|status| status != request.status) {
            return false;
        }
        if self
            .category
            .is_some_and(|category| category != request.category)
        {
            return false;
        }
        if self
            .priority
            .is_some_and(|priority| priority != request.priority)
        {
            return false;
        }
        if let Some(department) = &self.department {
            if !department.eq_ignore_ascii_case(&request.department) {
                return false;
            }
        }
        if let Some(needle) = &self.title_contains {
            if !request
                .title
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

impl TryFrom<&crate::params::ListRequests> for RequestFilter {
    type Error = crate::DeskError;

    /// Convert string-typed list parameters into a filter.
    ///
    /// A status of `all` (the presenter's catch-all choice) clears the status
    /// criterion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use desk_core::{models::RequestFilter, params::ListRequests};
    ///
    /// let params = ListRequests {
    ///     status: Some("all".to_string()),
    ///     ..Default::default()
    /// };
    /// let filter = RequestFilter::try_from(&params)?;
    /// assert_eq!(filter, RequestFilter::default());
    /// # desk_core::Result::<()>::Ok(())
    /// ```
    fn try_from(params: &crate::params::ListRequests) -> Result<Self, Self::Error> {
        let status = match params.status.as_deref() {
            None | Some("all") => None,
            Some(raw) => Some(crate::params::parse_field("status", raw)?),
        };
        let category = params
            .category
            .as_deref()
            .map(|raw| crate::params::parse_field("category", raw))
            .transpose()?;
        let priority = params
            .priority
            .as_deref()
            .map(|raw| crate::params::parse_field("priority", raw))
            .transpose()?;

        Ok(Self {
            status,
            category,
            priority,
            department: params.department.clone(),
            title_contains: params.search.clone(),
        })
    }
}
