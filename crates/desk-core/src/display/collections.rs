//! Collection wrapper type for displaying groups of requests.

use std::{fmt, ops::Index};

use crate::models::Request;

/// Newtype wrapper for displaying a list of requests.
///
/// Each request is shown in its compact summary form. Empty lists render a
/// single line instead of nothing.
///
/// # Examples
///
/// ```rust
/// use desk_core::display::Requests;
///
/// let requests = Requests(vec![]);
/// assert!(requests.is_empty());
/// assert_eq!(format!("{}", requests), "No requests to show.\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Requests(pub Vec<Request>);

impl Requests {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of requests in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the request at the given index.
    pub fn get(&self, index: usize) -> Option<&Request> {
        self.0.get(index)
    }

    /// Get an iterator over the requests.
    pub fn iter(&self) -> std::slice::Iter<'_, Request> {
        self.0.iter()
    }

    /// IDs in display order.
    pub fn ids(&self) -> Vec<u64> {
        self.0.iter().map(|request| request.id).collect()
    }
}

impl Index<usize> for Requests {
    type Output = Request;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Requests {
    type Item = Request;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Requests {
    type Item = &'a Request;
    type IntoIter = std::slice::Iter<'a, Request>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Requests {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No requests to show.");
        }
        for request in &self.0 {
            request.fmt_summary(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{Priority, RequestCategory, RequestStatus};

    fn request(id: u64, title: &str, status: RequestStatus) -> Request {
        let ts = Timestamp::from_second(1640995200).unwrap();
        Request {
            id,
            title: title.to_string(),
            description: "desc".to_string(),
            category: RequestCategory::ItSupport,
            priority: Priority::Low,
            status,
            requester_name: "Ana".to_string(),
            requester_email: "ana@x.com".to_string(),
            department: "IT".to_string(),
            created_at: ts,
            updated_at: ts,
            completed_at: None,
            assigned_to: None,
            notes: None,
            attachments: vec![],
        }
    }

    #[test]
    fn test_requests_display_lists_each_summary() {
        let requests = Requests(vec![
            request(2, "VPN access", RequestStatus::InReview),
            request(1, "Monitor", RequestStatus::Completed),
        ]);
        let output = requests.to_string();

        assert!(output.contains("## VPN access (ID: 2) [Low]"));
        assert!(output.contains("- **Status**: ➤ In Review"));
        assert!(output.contains("- **Next**: approved, rejected"));
        assert!(output.contains("## Monitor (ID: 1) [Low]"));
        assert!(output.contains("- **Category**: IT support • IT"));
        // Newest first is preserved
        assert!(output.find("VPN access").unwrap() < output.find("Monitor").unwrap());
    }

    #[test]
    fn test_terminal_status_offers_no_next_step() {
        let requests = Requests(vec![request(1, "Monitor", RequestStatus::Rejected)]);
        assert!(!requests.to_string().contains("**Next**"));
    }

    #[test]
    fn test_requests_accessors() {
        let requests = Requests(vec![
            request(5, "A", RequestStatus::Pending),
            request(3, "B", RequestStatus::Pending),
        ]);
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].title, "B");
        assert_eq!(requests.get(2), None);
        assert_eq!(requests.ids(), vec![5, 3]);
    }
}
