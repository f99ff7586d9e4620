//! Pull request parameter types

use schemars::JsonSchema;
use serde::Deserialize;

use crate::status::{PullRequestStatusFilter, ThreadStatusArg};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPullRequestParams {
    #[schemars(description = "The ID or name of the repository")]
    pub repository_id: String,
    #[schemars(description = "The ID of the pull request")]
    pub pull_request_id: i64,
    #[schemars(description = "The ID or name of the project")]
    pub project_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListPullRequestsParams {
    #[schemars(description = "The ID or name of the repository")]
    pub repository_id: String,
    #[schemars(description = "The ID or name of the project")]
    pub project_id: String,
    #[schemars(description = "Filter by status (active, abandoned, completed, all)")]
    pub status: Option<PullRequestStatusFilter>,
    #[schemars(description = "Filter by creator ID")]
    pub creator_id: Option<String>,
    #[schemars(description = "Filter by reviewer ID")]
    pub reviewer_id: Option<String>,
    #[schemars(description = "Filter by source branch, e.g. refs/heads/feature")]
    pub source_ref_name: Option<String>,
    #[schemars(description = "Filter by target branch, e.g. refs/heads/main")]
    pub target_ref_name: Option<String>,
    #[schemars(description = "Whether to include the _links field")]
    pub include_links: Option<bool>,
}

/// Identifies a pull request; shared by both comment listing tools
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestRefParams {
    #[schemars(description = "The ID or name of the repository")]
    pub repository_id: String,
    #[schemars(description = "The ID of the pull request")]
    pub pull_request_id: i64,
    #[schemars(description = "The ID or name of the project")]
    pub project_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPrThreadCommentsParams {
    #[schemars(description = "The ID or name of the repository")]
    pub repository_id: String,
    #[schemars(description = "The ID of the pull request")]
    pub pull_request_id: i64,
    #[schemars(description = "The ID of the thread")]
    pub thread_id: i64,
    #[schemars(description = "The ID or name of the project")]
    pub project_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePrCommentParams {
    #[schemars(description = "The ID or name of the repository")]
    pub repository_id: String,
    #[schemars(description = "The ID of the pull request")]
    pub pull_request_id: i64,
    #[schemars(description = "The ID of the thread containing the comment")]
    pub thread_id: i64,
    #[schemars(description = "The ID of the comment to update")]
    pub comment_id: i64,
    #[schemars(description = "The new content of the comment")]
    pub content: String,
    #[schemars(description = "The ID or name of the project")]
    pub project_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePrThreadStatusParams {
    #[schemars(description = "The ID or name of the repository")]
    pub repository_id: String,
    #[schemars(description = "The ID of the pull request")]
    pub pull_request_id: i64,
    #[schemars(description = "The ID of the thread")]
    pub thread_id: i64,
    #[schemars(
        description = "New thread status (Unknown, Active, Fixed, WontFix, Closed, ByDesign, Pending; case-insensitive)"
    )]
    pub status: ThreadStatusArg,
    #[schemars(description = "The ID or name of the project")]
    pub project_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrCommentParams {
    #[schemars(description = "The ID or name of the repository")]
    pub repository_id: String,
    #[schemars(description = "The ID of the pull request")]
    pub pull_request_id: i64,
    #[schemars(description = "The content of the comment in markdown")]
    pub content: String,
    #[schemars(description = "The ID or name of the project")]
    pub project_id: String,
    #[schemars(description = "Path of the file to comment on; omit for a general comment")]
    pub file_path: Option<String>,
    #[schemars(description = "Line to anchor the comment at (default: 1 when filePath is set)")]
    pub line_number: Option<i64>,
    #[schemars(description = "The ID of the comment being replied to")]
    pub parent_comment_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPrFilesParams {
    #[schemars(description = "The ID or name of the repository")]
    pub repository_id: String,
    #[schemars(description = "The ID of the pull request")]
    pub pull_request_id: i64,
    #[schemars(description = "The ID or name of the project")]
    pub project_id: String,
    #[schemars(description = "Iteration ID to diff the latest iteration against")]
    pub compare_to: Option<String>,
}
