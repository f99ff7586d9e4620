//! Ports the tool adapters talk to
//!
//! One trait per Azure DevOps REST area. Single-entity reads return
//! `Ok(None)` when the service answers 404, so adapters can tell "absent"
//! apart from "failed".

use async_trait::async_trait;

use super::error::ApiResult;
use crate::types::{
    Comment, ConnectionData, GitPullRequest, GitPullRequestCommentThread,
    GitPullRequestIteration, GitPullRequestIterationChanges, GitRepository, JsonPatchOperation,
    ProjectListOptions, PullRequestSearchCriteria, TeamProject, WorkItem, WorkItemExpand,
    WorkItemQueryResult,
};

/// Git area: repositories, pull requests, threads and iterations
#[async_trait]
pub trait GitApi: Send + Sync {
    async fn get_pull_request(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
    ) -> ApiResult<Option<GitPullRequest>>;

    async fn get_pull_requests(
        &self,
        project: &str,
        repository_id: &str,
        criteria: &PullRequestSearchCriteria,
    ) -> ApiResult<Vec<GitPullRequest>>;

    async fn get_threads(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
    ) -> ApiResult<Vec<GitPullRequestCommentThread>>;

    async fn get_pull_request_thread(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
        thread_id: i64,
    ) -> ApiResult<Option<GitPullRequestCommentThread>>;

    async fn create_thread(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
        thread: &GitPullRequestCommentThread,
    ) -> ApiResult<GitPullRequestCommentThread>;

    /// PATCH a thread; only the fields set on `thread` change
    async fn update_thread(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
        thread_id: i64,
        thread: &GitPullRequestCommentThread,
    ) -> ApiResult<Option<GitPullRequestCommentThread>>;

    async fn update_comment(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
        thread_id: i64,
        comment_id: i64,
        comment: &Comment,
    ) -> ApiResult<Option<Comment>>;

    async fn get_pull_request_iterations(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
    ) -> ApiResult<Vec<GitPullRequestIteration>>;

    /// Changes of `iteration_id`, diffed against `compare_to` when given
    async fn get_pull_request_iteration_changes(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
        iteration_id: i64,
        compare_to: Option<i64>,
    ) -> ApiResult<GitPullRequestIterationChanges>;

    async fn get_repository(
        &self,
        project: &str,
        repository_id: &str,
    ) -> ApiResult<Option<GitRepository>>;

    async fn get_repositories(
        &self,
        project: &str,
        include_links: bool,
    ) -> ApiResult<Vec<GitRepository>>;
}

/// Core area: projects and the connection itself
#[async_trait]
pub trait CoreApi: Send + Sync {
    async fn get_projects(&self, options: &ProjectListOptions) -> ApiResult<Vec<TeamProject>>;

    async fn get_project(
        &self,
        project_id: &str,
        include_capabilities: bool,
        include_history: bool,
    ) -> ApiResult<Option<TeamProject>>;

    /// Who the credentials authenticate as
    async fn connection_data(&self) -> ApiResult<ConnectionData>;
}

/// Work item tracking area
#[async_trait]
pub trait WorkItemApi: Send + Sync {
    async fn get_work_item(
        &self,
        id: i64,
        expand: WorkItemExpand,
    ) -> ApiResult<Option<WorkItem>>;

    /// Batch fetch; the result follows the order of `ids`
    async fn get_work_items(&self, ids: &[i64], expand: WorkItemExpand)
        -> ApiResult<Vec<WorkItem>>;

    async fn query_by_wiql(
        &self,
        project: &str,
        team: Option<&str>,
        wiql: &str,
    ) -> ApiResult<WorkItemQueryResult>;

    async fn query_by_id(
        &self,
        project: &str,
        team: Option<&str>,
        query_id: &str,
    ) -> ApiResult<WorkItemQueryResult>;

    async fn create_work_item(
        &self,
        project: &str,
        work_item_type: &str,
        document: &[JsonPatchOperation],
    ) -> ApiResult<WorkItem>;
}

/// Everything the server needs from Azure DevOps
pub trait Connection: GitApi + CoreApi + WorkItemApi {}

impl<T: GitApi + CoreApi + WorkItemApi + ?Sized> Connection for T {}
