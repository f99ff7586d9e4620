//! Flattening of comment threads into stable response records
//!
//! The Git API returns threads with optional everything; tool callers get
//! records where every field is present, system comments are gone and the
//! enum codes are spelled out. Thread and comment order is whatever the
//! service returned.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::status::{comment_type_name, thread_status_name};
use crate::types::{Comment, GitPullRequestCommentThread};

/// One comment inside a thread record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestThreadCommentDetail {
    pub comment_id: i64,
    /// 0 for a root comment
    pub parent_comment_id: i64,
    pub content: String,
    /// Author display name, `Unknown` when absent
    pub author: String,
    /// text, codeChange, system or unknown
    pub comment_type: String,
    pub published_date: String,
    pub last_updated_date: String,
}

/// A thread with its comments, as returned by thread tools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestThreadResponse {
    pub thread_id: i64,
    /// Display name of the thread status
    pub status: String,
    /// Empty when the thread is not anchored to a file
    pub file_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_line: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_line: Option<i64>,
    pub comments: Vec<PullRequestThreadCommentDetail>,
}

/// One comment with its thread's context, as returned by `list_pr_comments`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestCommentResponse {
    #[serde(flatten)]
    pub comment: PullRequestThreadCommentDetail,
    pub thread_id: i64,
    pub thread_status: String,
    pub file_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<i64>,
}

/// Render a remote timestamp as millisecond-precision UTC with a `Z` suffix
///
/// Absent dates become `""`; anything that does not parse as RFC 3339 is
/// returned unchanged.
pub fn normalize_date(date: Option<&str>) -> String {
    match date {
        None => String::new(),
        Some(raw) => match DateTime::parse_from_rfc3339(raw) {
            Ok(parsed) => parsed
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            Err(_) => raw.to_string(),
        },
    }
}

/// Map one remote comment, filling defaults; never fails
pub fn normalize_comment(comment: &Comment) -> PullRequestThreadCommentDetail {
    PullRequestThreadCommentDetail {
        comment_id: comment.id.unwrap_or(0),
        parent_comment_id: comment.parent_comment_id.unwrap_or(0),
        content: comment.content.clone().unwrap_or_default(),
        author: comment
            .author
            .as_ref()
            .and_then(|a| a.display_name.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        comment_type: comment_type_name(comment.comment_type).to_string(),
        published_date: normalize_date(comment.published_date.as_deref()),
        last_updated_date: normalize_date(comment.last_updated_date.as_deref()),
    }
}

/// Whether a thread belongs in a thread listing
///
/// It must be anchored to a non-empty file path, carry at least one
/// non-system comment and have an id.
pub fn is_reviewable(thread: &GitPullRequestCommentThread) -> bool {
    thread.file_path().is_some()
        && thread.comments.iter().any(|c| !c.is_system())
        && thread.id.is_some()
}

/// Detail view of a single thread; no anchor filter, system comments dropped
pub fn normalize_thread(thread: &GitPullRequestCommentThread) -> PullRequestThreadResponse {
    PullRequestThreadResponse {
        thread_id: thread.id.unwrap_or(0),
        status: thread_status_name(thread.status).to_string(),
        file_path: thread.file_path().unwrap_or_default().to_string(),
        start_line: thread.start_line(),
        end_line: thread.end_line(),
        comments: thread
            .comments
            .iter()
            .filter(|c| !c.is_system())
            .map(normalize_comment)
            .collect(),
    }
}

/// Thread-grouped listing: reviewable threads only
pub fn normalize_threads(threads: &[GitPullRequestCommentThread]) -> Vec<PullRequestThreadResponse> {
    threads
        .iter()
        .filter(|t| is_reviewable(t))
        .map(normalize_thread)
        .collect()
}

/// Flat listing: every non-system comment of every thread
///
/// Threads need not be file-anchored here; general discussion comments
/// show up with an empty `filePath`.
pub fn flatten_comments(threads: &[GitPullRequestCommentThread]) -> Vec<PullRequestCommentResponse> {
    threads
        .iter()
        .flat_map(|thread| {
            let thread_id = thread.id.unwrap_or(0);
            let thread_status = thread_status_name(thread.status);
            let file_path = thread.file_path().unwrap_or_default();
            let line_number = thread.start_line();
            thread
                .comments
                .iter()
                .filter(|c| !c.is_system())
                .map(move |c| PullRequestCommentResponse {
                    comment: normalize_comment(c),
                    thread_id,
                    thread_status: thread_status.to_string(),
                    file_path: file_path.to_string(),
                    line_number,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{CommentThreadStatus, CommentType};
    use crate::types::{CommentThreadContext, IdentityRef};
    use serde_json::json;

    fn comment(id: i64, comment_type: CommentType) -> Comment {
        Comment {
            id: Some(id),
            content: Some(format!("comment {}", id)),
            comment_type: Some(comment_type),
            ..Default::default()
        }
    }

    fn thread(id: Option<i64>, path: Option<&str>, comments: Vec<Comment>) -> GitPullRequestCommentThread {
        GitPullRequestCommentThread {
            id,
            status: Some(CommentThreadStatus::Active),
            thread_context: path.map(|p| CommentThreadContext::single_line(p, 4)),
            comments,
            ..Default::default()
        }
    }

    #[test]
    fn test_comment_defaults() {
        let detail = normalize_comment(&Comment::default());
        assert_eq!(detail.comment_id, 0);
        assert_eq!(detail.parent_comment_id, 0);
        assert_eq!(detail.content, "");
        assert_eq!(detail.author, "Unknown");
        assert_eq!(detail.comment_type, "unknown");
        assert_eq!(detail.published_date, "");
        assert_eq!(detail.last_updated_date, "");
    }

    #[test]
    fn test_comment_fields_mapped() {
        let c = Comment {
            id: Some(3),
            parent_comment_id: Some(1),
            content: Some("LGTM".into()),
            author: Some(IdentityRef {
                display_name: Some("Grace".into()),
                ..Default::default()
            }),
            comment_type: Some(CommentType::CodeChange),
            published_date: Some("2024-03-01T09:15:30.1234567Z".into()),
            last_updated_date: Some("2024-03-01T11:15:30+02:00".into()),
            ..Default::default()
        };
        let detail = normalize_comment(&c);
        assert_eq!(detail.author, "Grace");
        assert_eq!(detail.comment_type, "codeChange");
        assert_eq!(detail.published_date, "2024-03-01T09:15:30.123Z");
        assert_eq!(detail.last_updated_date, "2024-03-01T09:15:30.000Z");
    }

    #[test]
    fn test_unparsable_date_passes_through() {
        assert_eq!(normalize_date(Some("yesterday")), "yesterday");
        assert_eq!(normalize_date(None), "");
    }

    #[test]
    fn test_reviewable_requires_anchor_human_comment_and_id() {
        assert!(is_reviewable(&thread(Some(1), Some("/a.rs"), vec![comment(1, CommentType::Text)])));
        assert!(!is_reviewable(&thread(Some(1), None, vec![comment(1, CommentType::Text)])));
        assert!(!is_reviewable(&thread(Some(1), Some(""), vec![comment(1, CommentType::Text)])));
        assert!(!is_reviewable(&thread(Some(1), Some("/a.rs"), vec![comment(1, CommentType::System)])));
        assert!(!is_reviewable(&thread(Some(1), Some("/a.rs"), vec![])));
        assert!(!is_reviewable(&thread(None, Some("/a.rs"), vec![comment(1, CommentType::Text)])));
    }

    #[test]
    fn test_threads_keep_remote_order_and_drop_system_comments() {
        let threads = vec![
            thread(
                Some(20),
                Some("/b.rs"),
                vec![
                    comment(5, CommentType::Text),
                    comment(6, CommentType::System),
                    comment(4, CommentType::Text),
                ],
            ),
            thread(Some(10), Some("/a.rs"), vec![comment(1, CommentType::Text)]),
        ];
        let out = normalize_threads(&threads);
        let ids: Vec<i64> = out.iter().map(|t| t.thread_id).collect();
        assert_eq!(ids, vec![20, 10]);
        let comment_ids: Vec<i64> = out[0].comments.iter().map(|c| c.comment_id).collect();
        assert_eq!(comment_ids, vec![5, 4]);
        assert_eq!(out[0].start_line, Some(4));
        assert_eq!(out[0].status, "Active");
    }

    #[test]
    fn test_detail_keeps_unanchored_thread() {
        let t = GitPullRequestCommentThread {
            id: Some(9),
            comments: vec![comment(1, CommentType::System), comment(2, CommentType::Text)],
            ..Default::default()
        };
        let out = normalize_thread(&t);
        assert_eq!(out.status, "Unknown");
        assert_eq!(out.file_path, "");
        assert_eq!(out.comments.len(), 1);
        assert_eq!(out.comments[0].comment_id, 2);
    }

    #[test]
    fn test_thread_response_omits_absent_lines() {
        let t = GitPullRequestCommentThread {
            id: Some(9),
            ..Default::default()
        };
        let value = serde_json::to_value(normalize_thread(&t)).unwrap();
        assert_eq!(
            value,
            json!({
                "threadId": 9,
                "status": "Unknown",
                "filePath": "",
                "comments": []
            })
        );
    }

    #[test]
    fn test_flatten_comments_carries_thread_context() {
        let threads = vec![
            thread(Some(1), Some("/a.rs"), vec![comment(1, CommentType::Text), comment(2, CommentType::System)]),
            thread(Some(2), None, vec![comment(3, CommentType::Text)]),
        ];
        let flat = flatten_comments(&threads);
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].thread_id, 1);
        assert_eq!(flat[0].file_path, "/a.rs");
        assert_eq!(flat[0].line_number, Some(4));
        assert_eq!(flat[1].comment.comment_id, 3);
        assert_eq!(flat[1].file_path, "");

        let value = serde_json::to_value(&flat[1]).unwrap();
        assert_eq!(value["commentId"], json!(3));
        assert_eq!(value["threadStatus"], json!("Active"));
        assert!(value.get("lineNumber").is_none());
    }
}
