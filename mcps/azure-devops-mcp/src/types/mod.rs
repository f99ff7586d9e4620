//! Type definitions for Azure DevOps entities
//!
//! Rust structs for the JSON shapes the Azure DevOps REST API returns and
//! accepts. Anything not modelled is kept in a flattened `extra` map.

pub mod common;
pub mod project;
pub mod pull_request;
pub mod repository;
pub mod thread;
pub mod work_item;

pub use common::{IdentityRef, ListResponse};
pub use project::{ConnectionData, ProjectListOptions, TeamProject};
pub use pull_request::{
    GitItem, GitPullRequest, GitPullRequestChange, GitPullRequestIteration,
    GitPullRequestIterationChanges, PullRequestSearchCriteria,
};
pub use repository::GitRepository;
pub use thread::{Comment, CommentPosition, CommentThreadContext, GitPullRequestCommentThread};
pub use work_item::{
    JsonPatchOperation, PatchOp, Wiql, WorkItem, WorkItemExpand, WorkItemLink,
    WorkItemQueryResult, WorkItemReference,
};
