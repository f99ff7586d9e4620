//! reqwest-backed Azure DevOps REST client
//!
//! Implements the [`GitApi`], [`CoreApi`] and [`WorkItemApi`] ports against
//! `{organization}/{project}/_apis/...`, authenticating with a personal
//! access token as the basic-auth password.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use super::api::{CoreApi, GitApi, WorkItemApi};
use super::error::{ApiError, ApiResult};
use crate::config::AzureDevOpsConfig;
use crate::error::{ToolError, ToolResult};
use crate::types::{
    Comment, ConnectionData, GitPullRequest, GitPullRequestCommentThread,
    GitPullRequestIteration, GitPullRequestIterationChanges, GitRepository, JsonPatchOperation,
    ListResponse, ProjectListOptions, PullRequestSearchCriteria, TeamProject, Wiql, WorkItem,
    WorkItemExpand, WorkItemQueryResult,
};

const JSON_PATCH: &str = "application/json-patch+json";

/// Azure DevOps REST client
#[derive(Clone)]
pub struct AzureDevOpsClient {
    http: Client,
    base: Url,
    token: String,
    api_version: String,
}

impl AzureDevOpsClient {
    /// Build a client from config without touching the network
    ///
    /// Missing credentials are an authentication error, an unusable
    /// organization URL an API error.
    pub fn new(config: &AzureDevOpsConfig) -> ToolResult<Self> {
        if config.organization_url.trim().is_empty() {
            return Err(ToolError::Api(
                "Organization URL is not configured (set AZURE_DEVOPS_ORG_URL)".into(),
            ));
        }
        if config.personal_access_token.is_empty() {
            return Err(ToolError::Authentication(
                "Personal access token is not configured (set AZURE_DEVOPS_PAT)".into(),
            ));
        }

        let base = Url::parse(config.organization_url.trim()).map_err(|e| {
            ToolError::Api(format!(
                "Invalid organization URL '{}': {}",
                config.organization_url, e
            ))
        })?;
        if base.cannot_be_a_base() {
            return Err(ToolError::Api(format!(
                "Invalid organization URL '{}'",
                config.organization_url
            )));
        }

        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ToolError::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base,
            token: config.personal_access_token.clone(),
            api_version: config.api_version.clone(),
        })
    }

    /// Build a client and check the credentials against the organization
    pub async fn connect(config: &AzureDevOpsConfig) -> ToolResult<Self> {
        let client = Self::new(config)?;
        client.verify().await?;
        Ok(client)
    }

    /// Probe `_apis/connectionData`
    pub async fn verify(&self) -> ToolResult<ConnectionData> {
        match self.connection_data().await {
            Ok(data) => {
                tracing::info!(
                    user = data.user_name().unwrap_or("unknown"),
                    "Authenticated with Azure DevOps"
                );
                Ok(data)
            }
            Err(ApiError::Unauthorized) => Err(ToolError::Authentication(
                ApiError::Unauthorized.to_string(),
            )),
            Err(e) => Err(ToolError::Api(e.to_string())),
        }
    }

    /// Organization URL this client talks to
    pub fn organization_url(&self) -> &str {
        self.base.as_str()
    }

    /// `{base}/{project?}/_apis/{segments...}?api-version=...`
    fn url(&self, project: Option<&str>, segments: &[&str]) -> ApiResult<Url> {
        let scope: Vec<&str> = project.into_iter().collect();
        self.scoped_url(&scope, segments)
    }

    /// `{base}/{scope...}/_apis/{segments...}?api-version=...`
    ///
    /// Each segment is percent-encoded on its own, so ids containing `/`
    /// or spaces stay one path segment. Team-scoped calls pass
    /// `[project, team]` as the scope.
    fn scoped_url(&self, scope: &[&str], segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidUrl(self.base.to_string()))?;
            path.pop_if_empty();
            path.extend(scope);
            path.push("_apis");
            path.extend(segments);
        }
        url.query_pairs_mut()
            .append_pair("api-version", &self.api_version);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!(%method, %url, "Azure DevOps request");
        self.http
            .request(method, url)
            .basic_auth("", Some(&self.token))
            .header(header::ACCEPT, "application/json")
    }

    /// Send and decode; a 404 becomes `Ok(None)` when `missing_ok`
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        missing_ok: bool,
    ) -> ApiResult<Option<T>> {
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND && missing_ok {
            return Ok(None);
        }
        // A rejected PAT gets a 203 with the HTML sign-in page
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::NON_AUTHORITATIVE_INFORMATION
        {
            return Err(ApiError::Unauthorized);
        }

        let body = response.text().await?;
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Azure DevOps error response");
            return Err(ApiError::from_body(status.as_u16(), &body));
        }
        Ok(Some(serde_json::from_str(&body)?))
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        self.execute(request, false)
            .await?
            .ok_or_else(|| ApiError::from_body(StatusCode::NOT_FOUND.as_u16(), ""))
    }

    async fn fetch_optional<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ApiResult<Option<T>> {
        self.execute(request, true).await
    }

    async fn fetch_list<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<Vec<T>> {
        let list: ListResponse<T> = self.fetch(request).await?;
        Ok(list.value)
    }

    fn pull_request_url(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
        rest: &[&str],
    ) -> ApiResult<Url> {
        let id = pull_request_id.to_string();
        let mut segments = vec!["git", "repositories", repository_id, "pullRequests", &id];
        segments.extend_from_slice(rest);
        self.url(Some(project), &segments)
    }
}

#[async_trait]
impl GitApi for AzureDevOpsClient {
    async fn get_pull_request(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
    ) -> ApiResult<Option<GitPullRequest>> {
        let url = self.pull_request_url(project, repository_id, pull_request_id, &[])?;
        self.fetch_optional(self.request(Method::GET, url)).await
    }

    async fn get_pull_requests(
        &self,
        project: &str,
        repository_id: &str,
        criteria: &PullRequestSearchCriteria,
    ) -> ApiResult<Vec<GitPullRequest>> {
        let mut url = self.url(
            Some(project),
            &["git", "repositories", repository_id, "pullRequests"],
        )?;
        url.query_pairs_mut().extend_pairs(criteria.query_pairs());
        self.fetch_list(self.request(Method::GET, url)).await
    }

    async fn get_threads(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
    ) -> ApiResult<Vec<GitPullRequestCommentThread>> {
        let url = self.pull_request_url(project, repository_id, pull_request_id, &["threads"])?;
        self.fetch_list(self.request(Method::GET, url)).await
    }

    async fn get_pull_request_thread(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
        thread_id: i64,
    ) -> ApiResult<Option<GitPullRequestCommentThread>> {
        let thread = thread_id.to_string();
        let url =
            self.pull_request_url(project, repository_id, pull_request_id, &["threads", &thread])?;
        self.fetch_optional(self.request(Method::GET, url)).await
    }

    async fn create_thread(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
        thread: &GitPullRequestCommentThread,
    ) -> ApiResult<GitPullRequestCommentThread> {
        let url = self.pull_request_url(project, repository_id, pull_request_id, &["threads"])?;
        self.fetch(self.request(Method::POST, url).json(thread)).await
    }

    async fn update_thread(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
        thread_id: i64,
        thread: &GitPullRequestCommentThread,
    ) -> ApiResult<Option<GitPullRequestCommentThread>> {
        let id = thread_id.to_string();
        let url =
            self.pull_request_url(project, repository_id, pull_request_id, &["threads", &id])?;
        self.fetch_optional(self.request(Method::PATCH, url).json(thread))
            .await
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
        let thread = thread_id.to_string();
        let id = comment_id.to_string();
        let url = self.pull_request_url(
            project,
            repository_id,
            pull_request_id,
            &["threads", &thread, "comments", &id],
        )?;
        self.fetch_optional(self.request(Method::PATCH, url).json(comment))
            .await
    }

    async fn get_pull_request_iterations(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
    ) -> ApiResult<Vec<GitPullRequestIteration>> {
        let url =
            self.pull_request_url(project, repository_id, pull_request_id, &["iterations"])?;
        self.fetch_list(self.request(Method::GET, url)).await
    }

    async fn get_pull_request_iteration_changes(
        &self,
        project: &str,
        repository_id: &str,
        pull_request_id: i64,
        iteration_id: i64,
        compare_to: Option<i64>,
    ) -> ApiResult<GitPullRequestIterationChanges> {
        let iteration = iteration_id.to_string();
        let mut url = self.pull_request_url(
            project,
            repository_id,
            pull_request_id,
            &["iterations", &iteration, "changes"],
        )?;
        if let Some(compare_to) = compare_to {
            url.query_pairs_mut()
                .append_pair("$compareTo", &compare_to.to_string());
        }
        self.fetch(self.request(Method::GET, url)).await
    }

    async fn get_repository(
        &self,
        project: &str,
        repository_id: &str,
    ) -> ApiResult<Option<GitRepository>> {
        let url = self.url(Some(project), &["git", "repositories", repository_id])?;
        self.fetch_optional(self.request(Method::GET, url)).await
    }

    async fn get_repositories(
        &self,
        project: &str,
        include_links: bool,
    ) -> ApiResult<Vec<GitRepository>> {
        let mut url = self.url(Some(project), &["git", "repositories"])?;
        if include_links {
            url.query_pairs_mut().append_pair("includeLinks", "true");
        }
        self.fetch_list(self.request(Method::GET, url)).await
    }
}

#[async_trait]
impl CoreApi for AzureDevOpsClient {
    async fn get_projects(&self, options: &ProjectListOptions) -> ApiResult<Vec<TeamProject>> {
        let mut url = self.url(None, &["projects"])?;
        url.query_pairs_mut().extend_pairs(options.query_pairs());
        self.fetch_list(self.request(Method::GET, url)).await
    }

    async fn get_project(
        &self,
        project_id: &str,
        include_capabilities: bool,
        include_history: bool,
    ) -> ApiResult<Option<TeamProject>> {
        let mut url = self.url(None, &["projects", project_id])?;
        {
            let mut query = url.query_pairs_mut();
            if include_capabilities {
                query.append_pair("includeCapabilities", "true");
            }
            if include_history {
                query.append_pair("includeHistory", "true");
            }
        }
        self.fetch_optional(self.request(Method::GET, url)).await
    }

    async fn connection_data(&self) -> ApiResult<ConnectionData> {
        let url = self.url(None, &["connectionData"])?;
        self.fetch(self.request(Method::GET, url)).await
    }
}

#[async_trait]
impl WorkItemApi for AzureDevOpsClient {
    async fn get_work_item(&self, id: i64, expand: WorkItemExpand) -> ApiResult<Option<WorkItem>> {
        let id = id.to_string();
        let mut url = self.url(None, &["wit", "workitems", &id])?;
        url.query_pairs_mut().append_pair("$expand", expand.as_str());
        self.fetch_optional(self.request(Method::GET, url)).await
    }

    async fn get_work_items(
        &self,
        ids: &[i64],
        expand: WorkItemExpand,
    ) -> ApiResult<Vec<WorkItem>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let joined = ids
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let mut url = self.url(None, &["wit", "workitems"])?;
        url.query_pairs_mut()
            .append_pair("ids", &joined)
            .append_pair("$expand", expand.as_str())
            .append_pair("errorPolicy", "omit");
        // Omitted (deleted or inaccessible) items come back as nulls
        let list: ListResponse<Option<WorkItem>> =
            self.fetch(self.request(Method::GET, url)).await?;
        Ok(list.value.into_iter().flatten().collect())
    }

    async fn query_by_wiql(
        &self,
        project: &str,
        team: Option<&str>,
        wiql: &str,
    ) -> ApiResult<WorkItemQueryResult> {
        let scope: Vec<&str> = std::iter::once(project).chain(team).collect();
        let url = self.scoped_url(&scope, &["wit", "wiql"])?;
        let body = Wiql {
            query: wiql.to_string(),
        };
        self.fetch(self.request(Method::POST, url).json(&body)).await
    }

    async fn query_by_id(
        &self,
        project: &str,
        team: Option<&str>,
        query_id: &str,
    ) -> ApiResult<WorkItemQueryResult> {
        let scope: Vec<&str> = std::iter::once(project).chain(team).collect();
        let url = self.scoped_url(&scope, &["wit", "wiql", query_id])?;
        self.fetch(self.request(Method::GET, url)).await
    }

    async fn create_work_item(
        &self,
        project: &str,
        work_item_type: &str,
        document: &[JsonPatchOperation],
    ) -> ApiResult<WorkItem> {
        let kind = format!("${}", work_item_type);
        let url = self.url(Some(project), &["wit", "workitems", &kind])?;
        let body = serde_json::to_vec(document)?;
        let request = self
            .request(Method::POST, url)
            .header(header::CONTENT_TYPE, JSON_PATCH)
            .body(body);
        self.fetch(request).await
    }
}
