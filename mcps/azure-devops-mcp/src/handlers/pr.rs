//! Pull request handler implementations
//!
//! Each handler makes its remote call(s) and shapes the result; turning
//! errors into response text is the router's job.

use crate::ado::GitApi;
use crate::error::{ToolError, ToolResult};
use crate::normalize::{
    flatten_comments, normalize_thread, normalize_threads, PullRequestCommentResponse,
    PullRequestThreadResponse,
};
use crate::params::{
    CreatePrCommentParams, GetPrFilesParams, GetPrThreadCommentsParams, GetPullRequestParams,
    ListPullRequestsParams, PullRequestRefParams, UpdatePrCommentParams,
    UpdatePrThreadStatusParams,
};
use crate::status::CommentType;
use crate::types::{
    Comment, CommentThreadContext, GitPullRequest, GitPullRequestChange,
    GitPullRequestCommentThread, PullRequestSearchCriteria,
};

/// Get a single pull request
pub async fn get_pull_request<A: GitApi + ?Sized>(
    api: &A,
    params: GetPullRequestParams,
) -> ToolResult<GitPullRequest> {
    api.get_pull_request(
        &params.project_id,
        &params.repository_id,
        params.pull_request_id,
    )
    .await
    .map_err(ToolError::remote("get pull request"))?
    .ok_or_else(|| {
        ToolError::NotFound(format!(
            "Pull request {} not found in repository {}",
            params.pull_request_id, params.repository_id
        ))
    })
}

/// List pull requests matching the optional filters
pub async fn list_pull_requests<A: GitApi + ?Sized>(
    api: &A,
    params: ListPullRequestsParams,
) -> ToolResult<Vec<GitPullRequest>> {
    let criteria = PullRequestSearchCriteria {
        status: params.status.map(|s| s.to_remote()),
        creator_id: params.creator_id,
        reviewer_id: params.reviewer_id,
        source_ref_name: params.source_ref_name,
        target_ref_name: params.target_ref_name,
        include_links: params.include_links,
    };

    api.get_pull_requests(&params.project_id, &params.repository_id, &criteria)
        .await
        .map_err(ToolError::remote("list pull requests"))
}

/// Every non-system comment of a pull request, one record per comment
pub async fn list_pr_comments<A: GitApi + ?Sized>(
    api: &A,
    params: PullRequestRefParams,
) -> ToolResult<Vec<PullRequestCommentResponse>> {
    let threads = api
        .get_threads(
            &params.project_id,
            &params.repository_id,
            params.pull_request_id,
        )
        .await
        .map_err(ToolError::remote("list PR comments"))?;

    Ok(flatten_comments(&threads))
}

/// File-anchored review threads with their replies
pub async fn list_pr_threads<A: GitApi + ?Sized>(
    api: &A,
    params: PullRequestRefParams,
) -> ToolResult<Vec<PullRequestThreadResponse>> {
    let threads = api
        .get_threads(
            &params.project_id,
            &params.repository_id,
            params.pull_request_id,
        )
        .await
        .map_err(ToolError::remote("list PR threads"))?;

    Ok(normalize_threads(&threads))
}

/// All comments of one thread, whether or not it is file-anchored
pub async fn get_pr_thread_comments<A: GitApi + ?Sized>(
    api: &A,
    params: GetPrThreadCommentsParams,
) -> ToolResult<PullRequestThreadResponse> {
    let thread = api
        .get_pull_request_thread(
            &params.project_id,
            &params.repository_id,
            params.pull_request_id,
            params.thread_id,
        )
        .await
        .map_err(ToolError::remote("get PR thread comments"))?
        .ok_or_else(|| thread_not_found(params.thread_id, params.pull_request_id))?;

    Ok(normalize_thread(&thread))
}

/// Replace the content of an existing comment
pub async fn update_pr_comment<A: GitApi + ?Sized>(
    api: &A,
    params: UpdatePrCommentParams,
) -> ToolResult<Comment> {
    let comment = Comment {
        content: Some(params.content),
        ..Default::default()
    };

    api.update_comment(
        &params.project_id,
        &params.repository_id,
        params.pull_request_id,
        params.thread_id,
        params.comment_id,
        &comment,
    )
    .await
    .map_err(ToolError::remote("update PR comment"))?
    .ok_or_else(|| {
        ToolError::NotFound(format!(
            "Comment {} not found in thread {}",
            params.comment_id, params.thread_id
        ))
    })
}

/// Set a thread's status and return the updated thread
pub async fn update_pr_thread_status<A: GitApi + ?Sized>(
    api: &A,
    params: UpdatePrThreadStatusParams,
) -> ToolResult<PullRequestThreadResponse> {
    let patch = GitPullRequestCommentThread {
        status: Some(params.status.0),
        ..Default::default()
    };

    let thread = api
        .update_thread(
            &params.project_id,
            &params.repository_id,
            params.pull_request_id,
            params.thread_id,
            &patch,
        )
        .await
        .map_err(ToolError::remote("update thread status"))?
        .ok_or_else(|| thread_not_found(params.thread_id, params.pull_request_id))?;

    Ok(normalize_thread(&thread))
}

/// Start a new thread, anchored to a file line when `filePath` is given
pub async fn create_pr_comment<A: GitApi + ?Sized>(
    api: &A,
    params: CreatePrCommentParams,
) -> ToolResult<GitPullRequestCommentThread> {
    let thread = new_comment_thread(&params);

    api.create_thread(
        &params.project_id,
        &params.repository_id,
        params.pull_request_id,
        &thread,
    )
    .await
    .map_err(ToolError::remote("create PR comment"))
}

/// Thread body for `create_pr_comment`
pub fn new_comment_thread(params: &CreatePrCommentParams) -> GitPullRequestCommentThread {
    let comment = Comment {
        content: Some(params.content.clone()),
        parent_comment_id: params.parent_comment_id,
        comment_type: Some(CommentType::Text),
        ..Default::default()
    };

    let thread_context = params
        .file_path
        .as_deref()
        .filter(|path| !path.is_empty())
        .map(|path| CommentThreadContext::single_line(path, params.line_number.unwrap_or(1)));

    GitPullRequestCommentThread {
        comments: vec![comment],
        thread_context,
        ..Default::default()
    }
}

/// Files changed in the latest iteration
///
/// With `compareTo` the changes are diffed against that iteration instead
/// of the target branch. A blank `compareTo` counts as absent.
pub async fn get_pr_files<A: GitApi + ?Sized>(
    api: &A,
    params: GetPrFilesParams,
) -> ToolResult<Vec<GitPullRequestChange>> {
    let compare_to = params
        .compare_to
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(parse_iteration_id)
        .transpose()?;

    let iterations = api
        .get_pull_request_iterations(
            &params.project_id,
            &params.repository_id,
            params.pull_request_id,
        )
        .await
        .map_err(ToolError::remote("get PR files"))?;

    let Some(latest) = iterations.last() else {
        return Ok(Vec::new());
    };
    let iteration_id = latest
        .id
        .filter(|id| *id != 0)
        .ok_or_else(|| ToolError::RemoteOperationFailed {
            operation: "get PR files",
            message: "Latest iteration ID is missing".to_string(),
        })?;

    let changes = api
        .get_pull_request_iteration_changes(
            &params.project_id,
            &params.repository_id,
            params.pull_request_id,
            iteration_id,
            compare_to,
        )
        .await
        .map_err(ToolError::remote("get PR files"))?;

    Ok(changes.into_entries())
}

fn parse_iteration_id(raw: &str) -> ToolResult<i64> {
    raw.trim().parse().map_err(|_| {
        ToolError::Validation(format!(
            "compareTo must be a numeric iteration ID, got '{}'",
            raw
        ))
    })
}

fn thread_not_found(thread_id: i64, pull_request_id: i64) -> ToolError {
    ToolError::NotFound(format!(
        "Thread {} not found in pull request {}",
        thread_id, pull_request_id
    ))
}
