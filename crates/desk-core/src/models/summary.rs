//! Dashboard aggregate counts.

use serde::{Deserialize, Serialize};

use super::{Request, RequestStatus};

/// Per-status tallies over a request collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Total number of requests
    pub total: usize,
    pub pending: usize,
    pub in_review: usize,
    pub approved: usize,
    pub rejected: usize,
    pub completed: usize,
}

impl DashboardStats {
    /// Tally the given requests.
    pub fn from_requests<'a>(requests: impl IntoIterator<Item = &'a Request>) -> Self {
        requests
            .into_iter()
            .fold(Self::default(), |mut stats, request| {
                stats.total += 1;
                match request.status {
                    RequestStatus::Pending => stats.pending += 1,
                    RequestStatus::InReview => stats.in_review += 1,
                    RequestStatus::Approved => stats.approved += 1,
                    RequestStatus::Rejected => stats.rejected += 1,
                    RequestStatus::Completed => stats.completed += 1,
                }
                stats
            })
    }

    /// Requests that were approved, whether or not they are done yet.
    pub fn approved_total(&self) -> usize {
        self.approved + self.completed
    }
}

impl From<&[Request]> for DashboardStats {
    fn from(requests: &[Request]) -> Self {
        Self::from_requests(requests)
    }
}
