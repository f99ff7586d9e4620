//! Git repository types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A Git repository hosted in a team project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitRepository {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,

    /// Owning project, as a reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_repository_keeps_links() {
        let raw = json!({
            "id": "r-1",
            "name": "api",
            "defaultBranch": "refs/heads/main",
            "_links": { "self": { "href": "https://dev.azure.com/x" } }
        });
        let repo: GitRepository = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(repo.default_branch.as_deref(), Some("refs/heads/main"));
        assert_eq!(serde_json::to_value(&repo).unwrap(), raw);
    }
}
