//! In-memory Azure DevOps used by the dispatch tests
//!
//! Holds a small mutable world (pull requests, threads, iterations, work
//! items, ...) and records every port call so tests can assert what was
//! asked of the service, or that nothing was.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use azure_devops_mcp::ado::{ApiError, ApiResult, CoreApi, GitApi, WorkItemApi};
use azure_devops_mcp::types::{
    Comment, ConnectionData, GitPullRequest, GitPullRequestChange, GitPullRequestCommentThread,
    GitPullRequestIteration, GitPullRequestIterationChanges, GitRepository, JsonPatchOperation,
    ProjectListOptions, PullRequestSearchCriteria, TeamProject, WorkItem, WorkItemExpand,
    WorkItemQueryResult,
};
use azure_devops_mcp::AzureDevOpsMcpServer;
use rmcp::model::{CallToolResult, JsonObject, RawContent};
use serde_json::{json, Value};

/// One recorded port call
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub args: Value,
}

#[derive(Default)]
pub struct FakeAdo {
    pub pull_requests: Mutex<Vec<GitPullRequest>>,
    pub threads: Mutex<Vec<GitPullRequestCommentThread>>,
    pub iterations: Mutex<Vec<GitPullRequestIteration>>,
    pub changes: Mutex<GitPullRequestIterationChanges>,
    pub projects: Mutex<Vec<TeamProject>>,
    pub repositories: Mutex<Vec<GitRepository>>,
    pub work_items: Mutex<Vec<WorkItem>>,
    pub query_result: Mutex<WorkItemQueryResult>,
    /// When set, every call fails with this HTTP status and message
    pub failure: Mutex<Option<(u16, String)>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeAdo {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<&'static str> {
        self.calls().into_iter().map(|c| c.method).collect()
    }

    pub fn fail_with(&self, status: u16, message: &str) {
        *self.failure.lock().unwrap() = Some((status, message.to_string()));
    }

    fn record(&self, method: &'static str, args: Value) -> ApiResult<()> {
        self.calls.lock().unwrap().push(Call { method, args });
        match self.failure.lock().unwrap().as_ref() {
            Some((status, message)) => Err(ApiError::Http {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl GitApi for FakeAdo {
    async fn get_pull_request(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
    ) -> ApiResult<Option<GitPullRequest>> {
        self.record(
            "get_pull_request",
            json!([project, repository_id, pull_request_id]),
        )?;
        Ok(self
            .pull_requests
            .lock()
            .unwrap()
            .iter()
            .find(|pr| pr.pull_request_id == Some(pull_request_id))
            .cloned())
    }

    async fn get_pull_requests(
        &self,
        project: &str,
        repository_id: &str,
        criteria: &PullRequestSearchCriteria,
    ) -> ApiResult<Vec<GitPullRequest>> {
        let pairs: Vec<Value> = criteria
            .query_pairs()
            .into_iter()
            .map(|(k, v)| json!([k, v]))
            .collect();
        self.record("get_pull_requests", json!([project, repository_id, pairs]))?;
        Ok(self.pull_requests.lock().unwrap().clone())
    }

    async fn get_threads(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
    ) -> ApiResult<Vec<GitPullRequestCommentThread>> {
        self.record("get_threads", json!([project, repository_id, pull_request_id]))?;
        Ok(self.threads.lock().unwrap().clone())
    }

    async fn get_pull_request_thread(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
        thread_id: i64,
    ) -> ApiResult<Option<GitPullRequestCommentThread>> {
        self.record(
            "get_pull_request_thread",
            json!([project, repository_id, pull_request_id, thread_id]),
        )?;
        Ok(self
            .threads
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == Some(thread_id))
            .cloned())
    }

    async fn create_thread(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
        thread: &GitPullRequestCommentThread,
    ) -> ApiResult<GitPullRequestCommentThread> {
        self.record(
            "create_thread",
            json!([project, repository_id, pull_request_id, thread]),
        )?;
        let mut threads = self.threads.lock().unwrap();
        let next_id = threads.iter().filter_map(|t| t.id).max().unwrap_or(0) + 1;
        let mut created = thread.clone();
        created.id = Some(next_id);
        for (i, comment) in created.comments.iter_mut().enumerate() {
            comment.id = Some(i as i64 + 1);
        }
        threads.push(created.clone());
        Ok(created)
    }

    async fn update_thread(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
        thread_id: i64,
        thread: &GitPullRequestCommentThread,
    ) -> ApiResult<Option<GitPullRequestCommentThread>> {
        self.record(
            "update_thread",
            json!([project, repository_id, pull_request_id, thread_id, thread]),
        )?;
        let mut threads = self.threads.lock().unwrap();
        Ok(threads
            .iter_mut()
            .find(|t| t.id == Some(thread_id))
            .map(|existing| {
                if thread.status.is_some() {
                    existing.status = thread.status;
                }
                existing.clone()
            }))
    }

    async fn update_comment(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
        thread_id: i64,
        comment_id: i64,
        comment: &Comment,
    ) -> ApiResult<Option<Comment>> {
        self.record(
            "update_comment",
            json!([project, repository_id, pull_request_id, thread_id, comment_id, comment]),
        )?;
        let mut threads = self.threads.lock().unwrap();
        Ok(threads
            .iter_mut()
            .find(|t| t.id == Some(thread_id))
            .and_then(|t| t.comments.iter_mut().find(|c| c.id == Some(comment_id)))
            .map(|existing| {
                existing.content = comment.content.clone();
                existing.clone()
            }))
    }

    async fn get_pull_request_iterations(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
    ) -> ApiResult<Vec<GitPullRequestIteration>> {
        self.record(
            "get_pull_request_iterations",
            json!([project, repository_id, pull_request_id]),
        )?;
        Ok(self.iterations.lock().unwrap().clone())
    }

    async fn get_pull_request_iteration_changes(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
        iteration_id: i64,
        compare_to: Option<i64>,
    ) -> ApiResult<GitPullRequestIterationChanges> {
        self.record(
            "get_pull_request_iteration_changes",
            json!([project, repository_id, pull_request_id, iteration_id, compare_to]),
        )?;
        Ok(self.changes.lock().unwrap().clone())
    }

    async fn get_repository(
        &self,
        project: &str,
        repository_id: &str,
    ) -> ApiResult<Option<GitRepository>> {
        self.record("get_repository", json!([project, repository_id]))?;
        Ok(self
            .repositories
            .lock()
            .unwrap()
            .iter()
            .find(|r| {
                r.id.as_deref() == Some(repository_id) || r.name.as_deref() == Some(repository_id)
            })
            .cloned())
    }

    async fn get_repositories(
        &self,
        project: &str,
        include_links: bool,
    ) -> ApiResult<Vec<GitRepository>> {
        self.record("get_repositories", json!([project, include_links]))?;
        Ok(self.repositories.lock().unwrap().clone())
    }
}

#[async_trait]
impl CoreApi for FakeAdo {
    async fn get_projects(&self, options: &ProjectListOptions) -> ApiResult<Vec<TeamProject>> {
        self.record("get_projects", json!([options.top, options.skip]))?;
        Ok(self.projects.lock().unwrap().clone())
    }

    async fn get_project(
        &self,
        project_id: &str,
        include_capabilities: bool,
        include_history: bool,
    ) -> ApiResult<Option<TeamProject>> {
        self.record(
            "get_project",
            json!([project_id, include_capabilities, include_history]),
        )?;
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id.as_deref() == Some(project_id) || p.name.as_deref() == Some(project_id))
            .cloned())
    }

    async fn connection_data(&self) -> ApiResult<ConnectionData> {
        self.record("connection_data", json!([]))?;
        Ok(ConnectionData::default())
    }
}

#[async_trait]
impl WorkItemApi for FakeAdo {
    async fn get_work_item(&self, id: i64, expand: WorkItemExpand) -> ApiResult<Option<WorkItem>> {
        self.record("get_work_item", json!([id, expand]))?;
        Ok(self
            .work_items
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.id == Some(id))
            .cloned())
    }

    async fn get_work_items(&self, ids: &[i64], expand: WorkItemExpand) -> ApiResult<Vec<WorkItem>> {
        self.record("get_work_items", json!([ids, expand]))?;
        let items = self.work_items.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| items.iter().find(|w| w.id == Some(*id)).cloned())
            .collect())
    }

    async fn query_by_wiql(
        &self,
        project: &str,
        team: Option<&str>,
        wiql: &str,
    ) -> ApiResult<WorkItemQueryResult> {
        self.record("query_by_wiql", json!([project, team, wiql]))?;
        Ok(self.query_result.lock().unwrap().clone())
    }

    async fn query_by_id(
        &self,
        project: &str,
        team: Option<&str>,
        query_id: &str,
    ) -> ApiResult<WorkItemQueryResult> {
        self.record("query_by_id", json!([project, team, query_id]))?;
        Ok(self.query_result.lock().unwrap().clone())
    }

    async fn create_work_item(
        &self,
        project: &str,
        work_item_type: &str,
        document: &[JsonPatchOperation],
    ) -> ApiResult<WorkItem> {
        self.record(
            "create_work_item",
            json!([project, work_item_type, document]),
        )?;
        let mut item = WorkItem {
            id: Some(1000),
            rev: Some(1),
            ..Default::default()
        };
        for op in document {
            if let (Some(field), Some(value)) = (op.path.strip_prefix("/fields/"), &op.value) {
                item.fields.insert(field.to_string(), value.clone());
            }
        }
        Ok(item)
    }
}

// ============================================================================
// Fixtures and helpers
// ============================================================================

pub fn server(fake: &Arc<FakeAdo>) -> AzureDevOpsMcpServer {
    AzureDevOpsMcpServer::new(fake.clone())
}

pub fn args(value: Value) -> Option<JsonObject> {
    match value {
        Value::Object(map) => Some(map),
        other => panic!("arguments must be an object, got {}", other),
    }
}

/// The single text item of a result
pub fn text(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1, "expected exactly one content item");
    match &result.content[0].raw {
        RawContent::Text(t) => t.text.clone(),
        other => panic!("expected text content, got {:?}", other),
    }
}

pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error.unwrap_or(false)
}

pub fn json_text(result: &CallToolResult) -> Value {
    let body = text(result);
    serde_json::from_str(&body).unwrap_or_else(|e| panic!("not JSON ({}): {}", e, body))
}

pub fn thread(value: Value) -> GitPullRequestCommentThread {
    serde_json::from_value(value).unwrap()
}

pub fn iteration(id: Option<i64>) -> GitPullRequestIteration {
    GitPullRequestIteration {
        id,
        ..Default::default()
    }
}

pub fn change(path: &str, change_type: &str) -> GitPullRequestChange {
    serde_json::from_value(json!({
        "changeTrackingId": 1,
        "changeType": change_type,
        "item": { "path": path }
    }))
    .unwrap()
}

/// The standard pull request coordinates used across tests
pub fn pr_args(extra: Value) -> Option<JsonObject> {
    let mut base = json!({
        "repositoryId": "repo-1",
        "pullRequestId": 42,
        "projectId": "proj"
    });
    if let (Some(base_map), Value::Object(extra_map)) = (base.as_object_mut(), extra) {
        base_map.extend(extra_map);
    }
    args(base)
}
