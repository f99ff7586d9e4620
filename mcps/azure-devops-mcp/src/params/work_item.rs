//! Work item parameter types

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::types::WorkItemExpand;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetWorkItemParams {
    #[schemars(description = "The ID of the work item")]
    pub work_item_id: i64,
    #[schemars(description = "What to expand: none, relations, fields, links or all")]
    pub expand: Option<WorkItemExpand>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListWorkItemsParams {
    #[schemars(description = "The ID or name of the project")]
    pub project_id: String,
    #[schemars(description = "ID of a saved query to run")]
    pub query_id: Option<String>,
    #[schemars(description = "WIQL query text; takes precedence over queryId")]
    pub wiql: Option<String>,
    #[schemars(description = "The ID or name of the team to scope the query to")]
    pub team_id: Option<String>,
    #[schemars(description = "Maximum number of work items to return")]
    pub top: Option<u32>,
    #[schemars(description = "Number of work items to skip")]
    pub skip: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkItemParams {
    #[schemars(description = "The ID or name of the project")]
    pub project_id: String,
    #[schemars(description = "Work item type, e.g. Task, Bug, User Story")]
    pub work_item_type: String,
    #[schemars(description = "Title of the work item")]
    pub title: String,
    #[schemars(description = "Description in HTML")]
    pub description: Option<String>,
    #[schemars(description = "User to assign the work item to")]
    pub assigned_to: Option<String>,
    #[schemars(description = "Area path")]
    pub area_path: Option<String>,
    #[schemars(description = "Iteration path")]
    pub iteration_path: Option<String>,
    #[schemars(description = "Priority (1-4)")]
    pub priority: Option<i64>,
    #[schemars(description = "Extra fields keyed by reference name, e.g. Microsoft.VSTS.Common.Severity")]
    pub additional_fields: Option<Map<String, Value>>,
}
