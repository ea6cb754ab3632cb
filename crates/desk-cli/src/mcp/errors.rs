//! Error handling utilities for MCP server

use desk_core::DeskError;
use rmcp::ErrorData;

/// Convert a desk error into an MCP error, prefixed with what was attempted.
///
/// Bad input and forbidden workflow moves map to `invalid_params`, unknown
/// ids to `resource_not_found`.
pub fn to_mcp_error(message: &str, error: &DeskError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        DeskError::InvalidInput { .. } | DeskError::InvalidTransition { .. } => {
            ErrorData::invalid_params(text, None)
        }
        DeskError::RequestNotFound { .. } => ErrorData::resource_not_found(text, None),
        DeskError::Serialization { .. } => ErrorData::internal_error(text, None),
    }
}

/// MCP error for a tool call naming an id the store does not hold.
pub fn not_found(message: &str, id: u64) -> ErrorData {
    to_mcp_error(message, &DeskError::RequestNotFound { id })
}
