//! Azure DevOps MCP Library
//!
//! MCP-compatible tools for Azure DevOps via its REST API.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use azure_devops_mcp::{AzureDevOpsClient, AzureDevOpsMcpServer, Config};
//!
//! let config = Config::load()?;
//! let client = AzureDevOpsClient::connect(&config.azure_devops).await?;
//! let server = AzureDevOpsMcpServer::new(Arc::new(client));
//! let result = server.handle("list_projects", Some(serde_json::Map::new())).await;
//! ```
//!
//! # Features
//! - Projects: List and view
//! - Work items: View, query (WIQL or saved query), create
//! - Repositories: List and view
//! - Pull requests: View, list, changed files
//! - Review threads: List, read, reply, update comments, resolve
//!
//! # Requirements
//! - An organization URL and a personal access token

pub mod ado;
pub mod config;
pub mod error;
pub mod handlers;
pub mod normalize;
pub mod params;
pub mod router;
pub mod server;
pub mod status;
pub mod tools;
pub mod types;

// Re-export main server type
pub use server::AzureDevOpsMcpServer;

pub use ado::{AzureDevOpsClient, Connection};
pub use config::{AzureDevOpsConfig, Config};
pub use error::{ToolError, ToolResult};

// Re-export parameter types for direct API usage
pub use params::*;
