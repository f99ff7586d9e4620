//! Work item handler implementations

use serde_json::Value;

use crate::ado::WorkItemApi;
use crate::error::{ToolError, ToolResult};
use crate::params::{CreateWorkItemParams, GetWorkItemParams, ListWorkItemsParams};
use crate::types::{JsonPatchOperation, WorkItem, WorkItemExpand};

/// Get a single work item
pub async fn get_work_item<A: WorkItemApi + ?Sized>(
    api: &A,
    params: GetWorkItemParams,
) -> ToolResult<WorkItem> {
    api.get_work_item(params.work_item_id, params.expand.unwrap_or_default())
        .await
        .map_err(ToolError::remote("get work item"))?
        .ok_or_else(|| {
            ToolError::NotFound(format!("Work item '{}' not found", params.work_item_id))
        })
}

/// Run a query and fetch the work items it matched
///
/// `wiql` wins over `queryId`; with neither, every work item of the
/// project is listed by id. Paging is applied to the id list before the
/// batch fetch.
pub async fn list_work_items<A: WorkItemApi + ?Sized>(
    api: &A,
    params: ListWorkItemsParams,
) -> ToolResult<Vec<WorkItem>> {
    let team = params.team_id.as_deref();

    let result = match (&params.wiql, &params.query_id) {
        (Some(wiql), _) => api.query_by_wiql(&params.project_id, team, wiql).await,
        (None, Some(query_id)) => api.query_by_id(&params.project_id, team, query_id).await,
        (None, None) => {
            let wiql = default_wiql(&params.project_id);
            api.query_by_wiql(&params.project_id, team, &wiql).await
        }
    }
    .map_err(ToolError::remote("list work items"))?;

    let ids: Vec<i64> = result
        .ids()
        .into_iter()
        .skip(params.skip.unwrap_or(0) as usize)
        .take(params.top.map_or(usize::MAX, |top| top as usize))
        .collect();

    if ids.is_empty() {
        return Ok(Vec::new());
    }

    api.get_work_items(&ids, WorkItemExpand::All)
        .await
        .map_err(ToolError::remote("list work items"))
}

/// Create a work item from a JSON Patch document built from the params
pub async fn create_work_item<A: WorkItemApi + ?Sized>(
    api: &A,
    params: CreateWorkItemParams,
) -> ToolResult<WorkItem> {
    let document = work_item_document(&params);

    api.create_work_item(&params.project_id, &params.work_item_type, &document)
        .await
        .map_err(ToolError::remote("create work item"))
}

/// Every work item of a project, ordered by id
fn default_wiql(project: &str) -> String {
    format!(
        "SELECT [System.Id] FROM WorkItems WHERE [System.TeamProject] = '{}' ORDER BY [System.Id]",
        project.replace('\'', "''")
    )
}

/// Patch document for `create_work_item`
///
/// Named params come first in a fixed order; `additionalFields` follow in
/// their own order.
pub fn work_item_document(params: &CreateWorkItemParams) -> Vec<JsonPatchOperation> {
    let mut document = vec![JsonPatchOperation::add_field("System.Title", params.title.as_str())];

    if let Some(ref description) = params.description {
        document.push(JsonPatchOperation::add_field(
            "System.Description",
            description.as_str(),
        ));
    }
    if let Some(ref assignee) = params.assigned_to {
        document.push(JsonPatchOperation::add_field(
            "System.AssignedTo",
            assignee.as_str(),
        ));
    }
    if let Some(ref area) = params.area_path {
        document.push(JsonPatchOperation::add_field("System.AreaPath", area.as_str()));
    }
    if let Some(ref iteration) = params.iteration_path {
        document.push(JsonPatchOperation::add_field(
            "System.IterationPath",
            iteration.as_str(),
        ));
    }
    if let Some(priority) = params.priority {
        document.push(JsonPatchOperation::add_field(
            "Microsoft.VSTS.Common.Priority",
            priority,
        ));
    }
    if let Some(ref fields) = params.additional_fields {
        for (name, value) in fields {
            document.push(JsonPatchOperation::add_field(name, Value::clone(value)));
        }
    }

    document
}
