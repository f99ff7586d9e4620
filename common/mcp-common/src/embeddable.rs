//! Embeddable MCP trait for in-process execution
//!
//! [`EmbeddableMcp`] lets a host call a server's tools directly, without a
//! transport in between. Arguments arrive exactly as an MCP `tools/call`
//! request would carry them, absent object included, so the in-process path
//! and the stdio path share one dispatch.
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//!
//! let tools = server.list_tools();
//! let result = server.call_tool("get_pull_request", Some(args)).await;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject, Tool};

/// Trait for MCP servers that can be executed in-process
///
/// `call_tool` is infallible: every failure, including an unknown tool name,
/// is rendered into an error `CallToolResult` by the implementation.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Server name as used in MCP configuration files
    fn server_name(&self) -> &str;

    /// All tools with their names, descriptions and input schemas
    fn list_tools(&self) -> Vec<Tool>;

    /// Execute a tool by name
    async fn call_tool(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult;

    fn server_description(&self) -> Option<&str> {
        None
    }

    fn server_version(&self) -> Option<&str> {
        None
    }
}
