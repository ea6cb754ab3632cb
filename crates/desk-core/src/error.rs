//! Error types for the request desk library.

use thiserror::Error;

use crate::models::RequestStatus;

/// Comprehensive error type for all request desk operations.
#[derive(Error, Debug)]
pub enum DeskError {
    /// Request not found for the given ID
    #[error("Request with ID {id} not found")]
    RequestNotFound { id: u64 },
    /// Status change that is not an edge of the workflow
    #[error("Request {id} cannot move from '{from}' to '{to}'")]
    InvalidTransition {
        id: u64,
        from: RequestStatus,
        to: RequestStatus,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> DeskError {
        DeskError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl DeskError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Name of the offending field for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type alias for request desk operations
pub type Result<T> = std::result::Result<T, DeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = DeskError::invalid_input("title").with_reason("must not be empty");
        assert_eq!(err.field(), Some("title"));
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'title': must not be empty"
        );
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = DeskError::InvalidTransition {
            id: 7,
            from: RequestStatus::Pending,
            to: RequestStatus::Completed,
        };
        assert_eq!(
            err.to_string(),
            "Request 7 cannot move from 'pending' to 'completed'"
        );
        assert_eq!(err.field(), None);
    }
}
