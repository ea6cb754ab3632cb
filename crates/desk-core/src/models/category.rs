//! Request categories and priorities.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kind of business request being submitted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum RequestCategory {
    VacationTime,
    ExpenseReimbursement,
    EquipmentRequest,
    ItSupport,
    FacilityMaintenance,
    DocumentRequest,
    Other,
}

impl RequestCategory {
    /// All categories in the order forms list them.
    pub const ALL: [RequestCategory; 7] = [
        RequestCategory::VacationTime,
        RequestCategory::ExpenseReimbursement,
        RequestCategory::EquipmentRequest,
        RequestCategory::ItSupport,
        RequestCategory::FacilityMaintenance,
        RequestCategory::DocumentRequest,
        RequestCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestCategory::VacationTime => "vacation_time",
            RequestCategory::ExpenseReimbursement => "expense_reimbursement",
            RequestCategory::EquipmentRequest => "equipment_request",
            RequestCategory::ItSupport => "it_support",
            RequestCategory::FacilityMaintenance => "facility_maintenance",
            RequestCategory::DocumentRequest => "document_request",
            RequestCategory::Other => "other",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            RequestCategory::VacationTime => "Vacation time",
            RequestCategory::ExpenseReimbursement => "Expense reimbursement",
            RequestCategory::EquipmentRequest => "Equipment request",
            RequestCategory::ItSupport => "IT support",
            RequestCategory::FacilityMaintenance => "Facility maintenance",
            RequestCategory::DocumentRequest => "Document request",
            RequestCategory::Other => "Other",
        }
    }
}

impl FromStr for RequestCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace('-', "_");
        RequestCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| format!("Invalid request category: {s}"))
    }
}

/// Urgency of a request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}
