//! MCP Server implementation
//!
//! Exposes the tool registry over rmcp's `ServerHandler` (stdio) and over
//! [`EmbeddableMcp`] for in-process callers. Both paths go through
//! [`ToolRegistry::dispatch`].

use std::sync::Arc;

use mcp_common::{async_trait, CallToolResult, EmbeddableMcp, JsonObject, McpError, Tool};
use rmcp::{
    model::{
        CallToolRequestParam, ListToolsResult, PaginatedRequestParam, ServerCapabilities,
        ServerInfo,
    },
    service::RequestContext,
    RoleServer, ServerHandler,
};

use crate::ado::Connection;
use crate::router::ToolRegistry;
use crate::tools::build_registry;

/// The main Azure DevOps MCP Server
///
/// Cheap to clone: the connection and the registry are shared and never
/// mutated after construction.
#[derive(Clone)]
pub struct AzureDevOpsMcpServer {
    connection: Arc<dyn Connection>,
    registry: Arc<ToolRegistry>,
}

impl AzureDevOpsMcpServer {
    pub fn new(connection: Arc<dyn Connection>) -> Self {
        Self {
            connection,
            registry: Arc::new(build_registry()),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Dispatch one tool call
    pub async fn handle(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        self.registry
            .dispatch(Arc::clone(&self.connection), name, arguments)
            .await
    }
}

// ============================================================================
// ServerHandler Implementation
// ============================================================================

impl ServerHandler for AzureDevOpsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Azure DevOps MCP Server - provides tools for projects, work items, \
                 repositories and pull requests, including review threads and changed \
                 files. Requires AZURE_DEVOPS_ORG_URL and AZURE_DEVOPS_PAT."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.registry.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.handle(&request.name, request.arguments).await)
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for AzureDevOpsMcpServer {
    fn server_name(&self) -> &str {
        "azure-devops"
    }

    fn server_description(&self) -> Option<&str> {
        Some(
            "Azure DevOps MCP Server - projects, work items, repositories, \
             pull requests and review threads.",
        )
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.registry.tools()
    }

    async fn call_tool(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        self.handle(name, arguments).await
    }
}
