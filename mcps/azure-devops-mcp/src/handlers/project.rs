//! Project handler implementations

use crate::ado::CoreApi;
use crate::error::{ToolError, ToolResult};
use crate::params::{GetProjectParams, ListProjectsParams};
use crate::types::{ProjectListOptions, TeamProject};

/// List projects in the organization
pub async fn list_projects<A: CoreApi + ?Sized>(
    api: &A,
    params: ListProjectsParams,
) -> ToolResult<Vec<TeamProject>> {
    let options = ProjectListOptions {
        top: params.top,
        skip: params.skip,
        include_capabilities: params.include_capabilities,
        include_history: params.include_history,
    };

    api.get_projects(&options)
        .await
        .map_err(ToolError::remote("list projects"))
}

/// Get a single project by ID or name
pub async fn get_project<A: CoreApi + ?Sized>(
    api: &A,
    params: GetProjectParams,
) -> ToolResult<TeamProject> {
    api.get_project(
        &params.project_id,
        params.include_capabilities.unwrap_or(false),
        params.include_history.unwrap_or(false),
    )
    .await
    .map_err(ToolError::remote("get project"))?
    .ok_or_else(|| ToolError::NotFound(format!("Project '{}' not found", params.project_id)))
}
