//! Azure DevOps MCP Server
//!
//! Exposes Azure DevOps projects, work items, repositories and pull request
//! reviews as MCP tools over stdio.
//!
//! # Configuration
//!
//! Set `AZURE_DEVOPS_ORG_URL` and `AZURE_DEVOPS_PAT`, or configure in
//! `~/.binks/azure-devops.toml`:
//!
//! ```toml
//! [azure_devops]
//! organization_url = "https://dev.azure.com/my-org"
//! personal_access_token = "..."
//! ```
//!
//! # Usage
//!
//! Configure in `.mcp.json`:
//! ```json
//! {
//!   "mcpServers": {
//!     "azure-devops": {
//!       "command": "./target/release/azure-devops-mcp"
//!     }
//!   }
//! }
//! ```

use std::sync::Arc;

use azure_devops_mcp::{AzureDevOpsClient, AzureDevOpsMcpServer, Config};
use mcp_common::LogFormat;
use rmcp::{transport::stdio, ServiceExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mcp_common::init_tracing("azure_devops_mcp", LogFormat::from_env())?;

    tracing::info!("Starting Azure DevOps MCP Server");

    let config = Config::load()?;

    let client = AzureDevOpsClient::new(&config.azure_devops)
        .map_err(|e| anyhow::anyhow!(e.to_response_text()))?;
    tracing::info!("Organization URL: {}", client.organization_url());

    // Startup credential check; errors will be reported per-tool
    if let Err(e) = client.verify().await {
        tracing::warn!("Azure DevOps connection check failed: {}", e.to_response_text());
    }

    let server = AzureDevOpsMcpServer::new(Arc::new(client));

    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");

    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
