//! Display implementations for domain models.
//!
//! All output is markdown so the terminal renderer and MCP clients can show
//! it as-is.

use std::fmt;

use super::datetime::{LocalDate, LocalDateTime};
use crate::models::{DashboardStats, Priority, Request, RequestCategory, RequestStatus};

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for RequestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        writeln!(f, "- Priority: {}", self.priority.label())?;
        writeln!(f, "- Category: {}", self.category.label())?;
        writeln!(
            f,
            "- Requester: {} <{}>",
            self.requester_name, self.requester_email
        )?;
        writeln!(f, "- Department: {}", self.department)?;
        if let Some(assignee) = &self.assigned_to {
            writeln!(f, "- Assigned to: {assignee}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;
        if let Some(completed_at) = &self.completed_at {
            writeln!(f, "- Completed: {}", LocalDateTime(completed_at))?;
        }
        writeln!(f)?;

        writeln!(f, "{}", self.description)?;
        writeln!(f)?;

        if let Some(notes) = &self.notes {
            writeln!(f, "#### Notes")?;
            writeln!(f)?;
            writeln!(f, "{notes}")?;
            writeln!(f)?;
        }

        if !self.attachments.is_empty() {
            writeln!(f, "#### Attachments")?;
            writeln!(f)?;
            for attachment in &self.attachments {
                writeln!(f, "- {attachment}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl Request {
    /// Compact list entry: title line plus the fields a reviewer scans for.
    pub(crate) fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) [{}]",
            self.title,
            self.id,
            self.priority.label()
        )?;
        writeln!(f)?;
        writeln!(f, "- **Status**: {}", self.status.with_icon())?;
        writeln!(
            f,
            "- **Category**: {} • {}",
            self.category.label(),
            self.department
        )?;
        writeln!(
            f,
            "- **Requester**: {} • {}",
            self.requester_name, self.requester_email
        )?;
        writeln!(f, "- **Created**: {}", LocalDate(&self.created_at))?;

        let next = self.status.next_statuses();
        if !next.is_empty() {
            let actions: Vec<&str> = next.iter().map(RequestStatus::as_str).collect();
            writeln!(f, "- **Next**: {}", actions.join(", "))?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for DashboardStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Dashboard")?;
        writeln!(f)?;
        writeln!(f, "- Total: {}", self.total)?;
        writeln!(f, "- Pending: {}", self.pending)?;
        writeln!(f, "- In review: {}", self.in_review)?;
        writeln!(
            f,
            "- Approved: {} ({} completed)",
            self.approved_total(),
            self.completed
        )?;
        writeln!(f, "- Rejected: {}", self.rejected)
    }
}
