//! MCP Common - Shared plumbing for MCP servers
//!
//! - **Initialization**: [`init_tracing`] with a selectable [`LogFormat`]
//! - **Results**: helpers for building `CallToolResult` responses
//! - **Embeddable**: [`EmbeddableMcp`] trait for in-process tool dispatch
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{init_tracing, text_success, LogFormat};
//!
//! init_tracing("my_mcp", LogFormat::from_env())?;
//!
//! let result = text_success("ready");
//! ```

pub mod embeddable;
pub mod init;
pub mod result;

pub use embeddable::EmbeddableMcp;
pub use init::{init_tracing, LogFormat};
pub use result::{pretty_json, text_error, text_success};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, JsonObject, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
