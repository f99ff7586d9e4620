//! Comment thread type definitions
//!
//! Structs representing pull request comment threads as returned by the
//! Azure DevOps Git REST API, also used as request bodies when creating or
//! updating threads and comments.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{null_as_default, IdentityRef};
use crate::status::{CommentThreadStatus, CommentType};

/// A comment conversation, optionally anchored to a file range
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitPullRequestCommentThread {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CommentThreadStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_context: Option<CommentThreadContext>,

    /// Comments in the order the service returned them
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub comments: Vec<Comment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GitPullRequestCommentThread {
    /// File path of the anchor, if the thread has a non-empty one
    pub fn file_path(&self) -> Option<&str> {
        self.thread_context
            .as_ref()
            .and_then(|ctx| ctx.file_path.as_deref())
            .filter(|path| !path.is_empty())
    }

    pub fn start_line(&self) -> Option<i64> {
        self.thread_context
            .as_ref()
            .and_then(|ctx| ctx.right_file_start.as_ref())
            .map(|pos| pos.line)
    }

    pub fn end_line(&self) -> Option<i64> {
        self.thread_context
            .as_ref()
            .and_then(|ctx| ctx.right_file_end.as_ref())
            .map(|pos| pos.line)
    }
}

/// Where in the diff a thread is anchored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_file_start: Option<CommentPosition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_file_end: Option<CommentPosition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_file_start: Option<CommentPosition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_file_end: Option<CommentPosition>,
}

impl CommentThreadContext {
    /// Anchor a single line on the right (new) side of the diff
    pub fn single_line(file_path: impl Into<String>, line: i64) -> Self {
        let position = CommentPosition { line, offset: 1 };
        Self {
            file_path: Some(file_path.into()),
            right_file_start: Some(position),
            right_file_end: Some(position),
            ..Default::default()
        }
    }
}

/// 1-based line and character offset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentPosition {
    #[serde(default)]
    pub line: i64,
    #[serde(default)]
    pub offset: i64,
}

/// A single comment within a thread
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// 0 (or absent) for a root comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<IdentityRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_type: Option<CommentType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Comment {
    pub fn is_system(&self) -> bool {
        self.comment_type == Some(CommentType::System)
    }
}
