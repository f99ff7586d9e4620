//! Team project types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An Azure DevOps team project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamProject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// wellFormed, createPending, deleting, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Present only when capabilities were requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Paging and expansion options for listing projects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectListOptions {
    pub top: Option<u32>,
    pub skip: Option<u32>,
    pub include_capabilities: Option<bool>,
    pub include_history: Option<bool>,
}

impl ProjectListOptions {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(top) = self.top {
            pairs.push(("$top", top.to_string()));
        }
        if let Some(skip) = self.skip {
            pairs.push(("$skip", skip.to_string()));
        }
        if let Some(include) = self.include_capabilities {
            pairs.push(("includeCapabilities", include.to_string()));
        }
        if let Some(include) = self.include_history {
            pairs.push(("includeHistory", include.to_string()));
        }
        pairs
    }
}

/// Who the configured credentials authenticate as
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticated_user: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConnectionData {
    /// Display name of the authenticated user, if the service sent one
    pub fn user_name(&self) -> Option<&str> {
        let user = self.authenticated_user.as_ref()?;
        user.get("providerDisplayName")
            .or_else(|| user.get("customDisplayName"))
            .and_then(Value::as_str)
    }
}
