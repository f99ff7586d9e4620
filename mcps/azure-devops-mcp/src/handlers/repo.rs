//! Repository handler implementations

use crate::ado::GitApi;
use crate::error::{ToolError, ToolResult};
use crate::params::{GetRepositoryParams, ListRepositoriesParams};
use crate::types::GitRepository;

/// Get a single repository
///
/// The service always returns `_links` for a single repository; it is
/// dropped unless `includeLinks` is set.
pub async fn get_repository<A: GitApi + ?Sized>(
    api: &A,
    params: GetRepositoryParams,
) -> ToolResult<GitRepository> {
    let mut repository = api
        .get_repository(&params.project_id, &params.repository_id)
        .await
        .map_err(ToolError::remote("get repository"))?
        .ok_or_else(|| {
            ToolError::NotFound(format!("Repository '{}' not found", params.repository_id))
        })?;

    if params.include_links != Some(true) {
        repository.extra.remove("_links");
    }
    Ok(repository)
}

/// List repositories in a project
pub async fn list_repositories<A: GitApi + ?Sized>(
    api: &A,
    params: ListRepositoriesParams,
) -> ToolResult<Vec<GitRepository>> {
    api.get_repositories(&params.project_id, params.include_links.unwrap_or(false))
        .await
        .map_err(ToolError::remote("list repositories"))
}
