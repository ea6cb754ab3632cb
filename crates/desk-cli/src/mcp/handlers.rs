//! MCP tool handlers implementation

use std::sync::Arc;

use desk_core::{
    RequestStore,
    display::{CreateResult, DeleteResult, UpdateResult},
    models::UpdateRequestFields,
    params as core,
};
use log::debug;
use rmcp::{
    ErrorData,
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::{not_found, to_mcp_error};

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Core parameter types carry no MCP derives. This wrapper adds Deserialize
// and JsonSchema around any of them; #[serde(transparent)] makes the wire
// format exactly the wrapped type's.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Id = McpParams<core::Id>;
pub type CreateRequest = McpParams<core::CreateRequest>;
pub type ListRequests = McpParams<core::ListRequests>;
pub type UpdateStatus = McpParams<core::UpdateStatus>;
pub type UpdateRequest = McpParams<core::UpdateRequest>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    store: Arc<Mutex<RequestStore>>,
}

impl McpHandlers {
    pub fn new(store: Arc<Mutex<RequestStore>>) -> Self {
        Self { store }
    }

    pub async fn create_request(
        &self,
        Parameters(params): Parameters<CreateRequest>,
    ) -> McpResult {
        debug!("create_request: {params:?}");

        let request = self
            .store
            .lock()
            .await
            .create_request_validated(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to create request", &e))?;

        text_result(CreateResult::new(request).to_string())
    }

    pub async fn list_requests(&self, Parameters(params): Parameters<ListRequests>) -> McpResult {
        debug!("list_requests: {params:?}");

        let requests = self
            .store
            .lock()
            .await
            .list_requests(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to list requests", &e))?;

        let title = if requests.is_empty() {
            "No matching requests"
        } else {
            "Requests"
        };
        text_result(format!("# {title}\n\n{requests}"))
    }

    pub async fn show_request(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_request: {params:?}");

        let id = params.as_ref().id;
        let request = self
            .store
            .lock()
            .await
            .show_request(params.as_ref())
            .ok_or_else(|| not_found("Failed to show request", id))?;

        text_result(request.to_string())
    }

    pub async fn update_request_status(
        &self,
        Parameters(params): Parameters<UpdateStatus>,
    ) -> McpResult {
        debug!("update_request_status: {params:?}");

        let id = params.as_ref().id;
        let request = self
            .store
            .lock()
            .await
            .update_status_validated(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to update status", &e))?
            .ok_or_else(|| not_found("Failed to update status", id))?;

        let changes = vec![format!("Changed status to {}", request.status)];
        text_result(UpdateResult::with_changes(request, changes).to_string())
    }

    pub async fn update_request(
        &self,
        Parameters(params): Parameters<UpdateRequest>,
    ) -> McpResult {
        debug!("update_request: {params:?}");

        let id = params.as_ref().id;
        let changes = UpdateRequestFields::try_from(params.as_ref().clone())
            .map_err(|e| to_mcp_error("Failed to update request", &e))?
            .change_list();
        let request = self
            .store
            .lock()
            .await
            .update_request_validated(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to update request", &e))?
            .ok_or_else(|| not_found("Failed to update request", id))?;

        text_result(UpdateResult::with_changes(request, changes).to_string())
    }

    pub async fn delete_request(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_request: {params:?}");

        let id = params.as_ref().id;
        let request = self
            .store
            .lock()
            .await
            .delete_request(params.as_ref())
            .ok_or_else(|| not_found("Failed to delete request", id))?;

        text_result(DeleteResult::new(request).to_string())
    }

    pub async fn dashboard(&self) -> McpResult {
        debug!("dashboard");

        let stats = self.store.lock().await.dashboard();
        text_result(stats.to_string())
    }

    pub async fn export_requests(&self) -> McpResult {
        debug!("export_requests");

        let json = self
            .store
            .lock()
            .await
            .export_json()
            .map_err(|e| to_mcp_error("Failed to export requests", &e))?;

        text_result(json)
    }
}
