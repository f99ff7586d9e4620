//! Work item tracking types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::null_as_default;

/// A work item with its field bag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<i64>,

    /// Reference name (e.g. `System.Title`) to value
    #[serde(default)]
    pub fields: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relations: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorkItem {
    pub fn title(&self) -> Option<&str> {
        self.fields.get("System.Title").and_then(Value::as_str)
    }
}

/// How much of a work item to return
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum WorkItemExpand {
    #[default]
    None,
    Relations,
    Fields,
    Links,
    All,
}

impl WorkItemExpand {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Relations => "relations",
            Self::Fields => "fields",
            Self::Links => "links",
            Self::All => "all",
        }
    }
}

/// Id-only reference returned by queries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkItemReference {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Link between two work items in a tree or one-hop query result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkItemLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<WorkItemReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<WorkItemReference>,
}

/// Result of a WIQL or stored query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemQueryResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_type: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub work_items: Vec<WorkItemReference>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub work_item_relations: Vec<WorkItemLink>,
}

impl WorkItemQueryResult {
    /// Ids in result order
    ///
    /// Flat queries list `workItems`; link queries only carry relations,
    /// whose targets are taken once each.
    pub fn ids(&self) -> Vec<i64> {
        if !self.work_items.is_empty() {
            return self.work_items.iter().map(|r| r.id).collect();
        }
        let mut ids: Vec<i64> = Vec::new();
        for id in self
            .work_item_relations
            .iter()
            .filter_map(|link| link.target.as_ref().map(|t| t.id))
        {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }
}

/// A WIQL query body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wiql {
    pub query: String,
}

/// Operation verb of a JSON Patch entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Replace,
    Remove,
    Test,
}

/// One entry of a JSON Patch document (RFC 6902)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonPatchOperation {
    pub op: PatchOp,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl JsonPatchOperation {
    /// `add` a value to `/fields/<reference name>`
    pub fn add_field(reference_name: &str, value: impl Into<Value>) -> Self {
        Self {
            op: PatchOp::Add,
            path: format!("/fields/{}", reference_name),
            value: Some(value.into()),
        }
    }
}
