//! Repository parameter types

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetRepositoryParams {
    #[schemars(description = "The ID or name of the project")]
    pub project_id: String,
    #[schemars(description = "The ID or name of the repository")]
    pub repository_id: String,
    #[schemars(description = "Whether to include the _links field")]
    pub include_links: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListRepositoriesParams {
    #[schemars(description = "The ID or name of the project")]
    pub project_id: String,
    #[schemars(description = "Whether to include the _links field")]
    pub include_links: Option<bool>,
}
