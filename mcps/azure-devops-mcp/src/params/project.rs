//! Project parameter types

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsParams {
    #[schemars(description = "Maximum number of projects to return")]
    pub top: Option<u32>,
    #[schemars(description = "Number of projects to skip")]
    pub skip: Option<u32>,
    #[schemars(description = "Include capabilities (source control, process template)")]
    pub include_capabilities: Option<bool>,
    #[schemars(description = "Include project history")]
    pub include_history: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectParams {
    #[schemars(description = "The ID or name of the project")]
    pub project_id: String,
    #[schemars(description = "Include capabilities (source control, process template)")]
    pub include_capabilities: Option<bool>,
    #[schemars(description = "Include project history")]
    pub include_history: Option<bool>,
}
