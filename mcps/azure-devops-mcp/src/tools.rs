//! The tool table: names, descriptions and the handler behind each

use crate::handlers;
use crate::params::{
    CreatePrCommentParams, CreateWorkItemParams, GetPrFilesParams, GetPrThreadCommentsParams,
    GetProjectParams, GetPullRequestParams, GetRepositoryParams, GetWorkItemParams,
    ListProjectsParams, ListPullRequestsParams, ListRepositoriesParams, ListWorkItemsParams,
    PullRequestRefParams, UpdatePrCommentParams, UpdatePrThreadStatusParams,
};
use crate::router::ToolRegistry;

/// Registry with every Azure DevOps tool
pub fn build_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    // ========================================================================
    // Projects
    // ========================================================================

    registry
        .register(
            "list_projects",
            "List all projects in the Azure DevOps organization",
            |api, p: ListProjectsParams| async move { handlers::list_projects(&*api, p).await },
        )
        .register(
            "get_project",
            "Get details of a specific project",
            |api, p: GetProjectParams| async move { handlers::get_project(&*api, p).await },
        );

    // ========================================================================
    // Work items
    // ========================================================================

    registry
        .register(
            "get_work_item",
            "Get details of a specific work item",
            |api, p: GetWorkItemParams| async move { handlers::get_work_item(&*api, p).await },
        )
        .register(
            "list_work_items",
            "List work items matching a WIQL query, a saved query, or every item in a project",
            |api, p: ListWorkItemsParams| async move {
                handlers::list_work_items(&*api, p).await
            },
        )
        .register(
            "create_work_item",
            "Create a new work item",
            |api, p: CreateWorkItemParams| async move {
                handlers::create_work_item(&*api, p).await
            },
        );

    // ========================================================================
    // Repositories
    // ========================================================================

    registry
        .register(
            "get_repository",
            "Get details of a specific Git repository",
            |api, p: GetRepositoryParams| async move { handlers::get_repository(&*api, p).await },
        )
        .register(
            "list_repositories",
            "List Git repositories in a project",
            |api, p: ListRepositoriesParams| async move {
                handlers::list_repositories(&*api, p).await
            },
        );

    // ========================================================================
    // Pull requests
    // ========================================================================

    registry
        .register(
            "get_pull_request",
            "Get details of a specific pull request",
            |api, p: GetPullRequestParams| async move {
                handlers::get_pull_request(&*api, p).await
            },
        )
        .register(
            "list_pull_requests",
            "List pull requests in a repository, optionally filtered by status, creator, reviewer or branch",
            |api, p: ListPullRequestsParams| async move {
                handlers::list_pull_requests(&*api, p).await
            },
        )
        .register(
            "list_pr_comments",
            "List every comment in a pull request, one entry per comment with its thread's status and file",
            |api, p: PullRequestRefParams| async move {
                handlers::list_pr_comments(&*api, p).await
            },
        )
        .register(
            "list_pr_threads",
            "List file-anchored review threads of a pull request with all their replies",
            |api, p: PullRequestRefParams| async move {
                handlers::list_pr_threads(&*api, p).await
            },
        )
        .register(
            "get_pr_thread_comments",
            "Get all comments in a specific pull request thread",
            |api, p: GetPrThreadCommentsParams| async move {
                handlers::get_pr_thread_comments(&*api, p).await
            },
        )
        .register(
            "update_pr_comment",
            "Update the content of a pull request comment",
            |api, p: UpdatePrCommentParams| async move {
                handlers::update_pr_comment(&*api, p).await
            },
        )
        .register(
            "update_pr_thread_status",
            "Change the status of a pull request thread (Active, Fixed, WontFix, Closed, ByDesign, Pending)",
            |api, p: UpdatePrThreadStatusParams| async move {
                handlers::update_pr_thread_status(&*api, p).await
            },
        )
        .register(
            "create_pr_comment",
            "Add a comment to a pull request, optionally anchored to a file and line",
            |api, p: CreatePrCommentParams| async move {
                handlers::create_pr_comment(&*api, p).await
            },
        )
        .register(
            "get_pr_files",
            "List files changed in the latest iteration of a pull request",
            |api, p: GetPrFilesParams| async move { handlers::get_pr_files(&*api, p).await },
        );

    registry
}
