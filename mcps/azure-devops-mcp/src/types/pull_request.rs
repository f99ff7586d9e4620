//! Pull request, iteration and change types
//!
//! Structs mirror the Azure DevOps Git REST shapes. Fields the tools never
//! inspect land in `extra` so passthrough results lose nothing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::IdentityRef;
use crate::status::PullRequestStatus;

/// Represents an Azure DevOps pull request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitPullRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PullRequestStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentityRef>,

    /// ISO 8601 creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ref_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_ref_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Filters for listing pull requests (`searchCriteria.*` query parameters)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PullRequestSearchCriteria {
    pub status: Option<PullRequestStatus>,
    pub creator_id: Option<String>,
    pub reviewer_id: Option<String>,
    pub source_ref_name: Option<String>,
    pub target_ref_name: Option<String>,
    pub include_links: Option<bool>,
}

impl PullRequestSearchCriteria {
    /// Query pairs for the criteria that are set, in a stable order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("searchCriteria.status", status.wire_name().to_string()));
        }
        if let Some(ref id) = self.creator_id {
            pairs.push(("searchCriteria.creatorId", id.clone()));
        }
        if let Some(ref id) = self.reviewer_id {
            pairs.push(("searchCriteria.reviewerId", id.clone()));
        }
        if let Some(ref name) = self.source_ref_name {
            pairs.push(("searchCriteria.sourceRefName", name.clone()));
        }
        if let Some(ref name) = self.target_ref_name {
            pairs.push(("searchCriteria.targetRefName", name.clone()));
        }
        if let Some(include) = self.include_links {
            pairs.push(("searchCriteria.includeLinks", include.to_string()));
        }
        pairs
    }
}

/// A snapshot of a pull request's changes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitPullRequestIteration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Changes of one iteration, optionally diffed against another
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitPullRequestIterationChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_entries: Option<Vec<GitPullRequestChange>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_skip: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_top: Option<i64>,
}

/// One changed file in an iteration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitPullRequestChange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_tracking_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_id: Option<i64>,

    /// add, edit, delete, rename, ... possibly comma-combined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_type: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<GitItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_path: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The file a change refers to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_object_id: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GitPullRequestIterationChanges {
    /// Change entries, empty when the service omitted them
    pub fn into_entries(self) -> Vec<GitPullRequestChange> {
        self.change_entries.unwrap_or_default()
    }
}
