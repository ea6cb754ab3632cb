//! MCP server implementation for the request desk
//!
//! This module implements the Model Context Protocol server, exposing the
//! session's request store as tools an AI assistant can call.

use std::sync::Arc;

use anyhow::Result;
use desk_core::RequestStore;
use log::{debug, error, info};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use tokio::{
    signal::unix::{SignalKind, signal},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{CreateRequest, Id, ListRequests, McpResult, UpdateRequest, UpdateStatus};

/// MCP server for the request desk
#[derive(Clone)]
pub struct DeskMcpServer {
    store: Arc<Mutex<RequestStore>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl DeskMcpServer {
    pub fn new(store: RequestStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.store.clone())
    }

    #[tool(
        name = "create_request",
        description = "Submit a new business request. Requires title, description, category (vacation_time, expense_reimbursement, equipment_request, it_support, facility_maintenance, document_request, other), priority (low, medium, high), requester_name, a valid requester_email and department. The request starts as 'pending'; returns its ID."
    )]
    async fn create_request(&self, params: Parameters<CreateRequest>) -> McpResult {
        self.handlers().create_request(params).await
    }

    #[tool(
        name = "list_requests",
        description = "List requests, newest first. Optional filters: status (pending, in_review, approved, rejected, completed, or 'all'), category, priority, department (exact, case-insensitive) and search (substring of the title). Filters combine."
    )]
    async fn list_requests(&self, params: Parameters<ListRequests>) -> McpResult {
        self.handlers().list_requests(params).await
    }

    #[tool(
        name = "show_request",
        description = "Show every detail of one request: requester, status, timestamps, assignee, notes and attachments."
    )]
    async fn show_request(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_request(params).await
    }

    #[tool(
        name = "update_request_status",
        description = "Move a request through the approval workflow: pending → in_review, in_review → approved or rejected, approved → completed. Other moves are refused unless the server runs with --allow-any-transition. Reaching 'completed' records the completion time."
    )]
    async fn update_request_status(&self, params: Parameters<UpdateStatus>) -> McpResult {
        self.handlers().update_request_status(params).await
    }

    #[tool(
        name = "update_request",
        description = "Change fields of a request. Only the fields given are changed. Form fields cannot be blanked; an empty assigned_to or notes clears it. A status given here follows the same workflow rules as update_request_status."
    )]
    async fn update_request(&self, params: Parameters<UpdateRequest>) -> McpResult {
        self.handlers().update_request(params).await
    }

    #[tool(
        name = "delete_request",
        description = "Permanently remove a request. Other requests keep their order. This cannot be undone."
    )]
    async fn delete_request(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().delete_request(params).await
    }

    #[tool(
        name = "dashboard",
        description = "Request counts: total, pending, in review, approved (including completed) and rejected."
    )]
    async fn dashboard(&self) -> McpResult {
        self.handlers().dashboard().await
    }

    #[tool(
        name = "export_requests",
        description = "Every request as a JSON array, newest first."
    )]
    async fn export_requests(&self) -> McpResult {
        self.handlers().export_requests().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for DeskMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "desk".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"The request desk tracks business requests through an approval workflow. Requests live in memory for as long as this server runs.

## Core Concepts
- **Request**: a submission with title, description, category, priority, requester and department
- **Status**: pending → in_review → approved | rejected, then approved → completed

## Workflow
1. Submit with `create_request`
2. Review with `list_requests` and `show_request`
3. Move it along with `update_request_status`
4. Add an assignee, notes or attachments with `update_request`
5. Check totals with `dashboard`

## Tool Categories
- **Requests**: create_request, list_requests, show_request, update_request, delete_request
- **Workflow**: update_request_status
- **Reporting**: dashboard, export_requests"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: DeskMcpServer) -> Result<()> {
    use rmcp::{ServiceExt, transport::stdio};

    info!("Starting request desk MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_registers_every_tool() {
        let server = DeskMcpServer::new(RequestStore::default());
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec![
                "create_request",
                "dashboard",
                "delete_request",
                "export_requests",
                "list_requests",
                "show_request",
                "update_request",
                "update_request_status",
            ]
        );
    }

    #[test]
    fn test_server_info_enables_tools_only() {
        let info = DeskMcpServer::new(RequestStore::default()).get_info();

        assert_eq!(info.server_info.name, "desk");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_none());
    }
}
