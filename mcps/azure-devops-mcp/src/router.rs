//! Tool registry and the single dispatch entry point
//!
//! Each tool is registered once with its params type, description and
//! handler. [`ToolRegistry::dispatch`] runs the shared pipeline: look the
//! tool up, require an argument object, deserialize it into the params
//! type, run the handler, and render either pretty JSON or one error line.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use mcp_common::{pretty_json, text_error, text_success, CallToolResult, JsonObject, Tool};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::Instrument;

use crate::ado::Connection;
use crate::error::{ToolError, ToolResult};

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

type Invoke =
    Box<dyn Fn(Arc<dyn Connection>, JsonObject) -> BoxFuture<ToolResult<String>> + Send + Sync>;

struct ToolEntry {
    tool: Tool,
    invoke: Invoke,
}

/// Name → (schema, handler) table
#[derive(Default)]
pub struct ToolRegistry {
    entries: Vec<ToolEntry>,
    by_name: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`
    ///
    /// The input schema is generated from `P`. Registering a name twice
    /// replaces the earlier entry.
    pub fn register<P, R, F, Fut>(
        &mut self,
        name: &'static str,
        description: &'static str,
        handler: F,
    ) -> &mut Self
    where
        P: DeserializeOwned + JsonSchema + Send + 'static,
        R: Serialize + Send + 'static,
        F: Fn(Arc<dyn Connection>, P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ToolResult<R>> + Send + 'static,
    {
        let tool = Tool::new(name, description, input_schema::<P>());

        let invoke: Invoke = Box::new(move |conn: Arc<dyn Connection>, arguments: JsonObject| {
            let params: P = match serde_json::from_value(Value::Object(arguments)) {
                Ok(params) => params,
                Err(e) => {
                    tracing::debug!(error = %e, "Argument validation failed");
                    let failed: BoxFuture<ToolResult<String>> =
                        Box::pin(async move { Err(ToolError::Validation(e.to_string())) });
                    return failed;
                }
            };
            let call = handler(conn, params);
            Box::pin(async move {
                let result = call.await?;
                Ok(pretty_json(&result)?)
            })
        });

        let entry = ToolEntry { tool, invoke };
        match self.by_name.get(name) {
            Some(&index) => self.entries[index] = entry,
            None => {
                self.by_name.insert(name.to_string(), self.entries.len());
                self.entries.push(entry);
            }
        }
        self
    }

    /// Tools in registration order
    pub fn tools(&self) -> Vec<Tool> {
        self.entries.iter().map(|e| e.tool.clone()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run one tool call end to end
    ///
    /// Never fails: every error becomes an error result carrying the
    /// prefixed message from [`ToolError::to_response_text`].
    pub async fn dispatch(
        &self,
        conn: Arc<dyn Connection>,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> CallToolResult {
        let span = tracing::info_span!("tool_call", tool = %name);
        async move {
            match self.run(conn, name, arguments).await {
                Ok(text) => {
                    tracing::info!("Tool call succeeded");
                    text_success(text)
                }
                Err(e) => {
                    tracing::warn!(kind = e.kind(), error = %e, "Tool call failed");
                    text_error(e.to_response_text())
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn run(
        &self,
        conn: Arc<dyn Connection>,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> ToolResult<String> {
        let entry = self
            .by_name
            .get(name)
            .map(|&index| &self.entries[index])
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        let arguments = arguments.ok_or(ToolError::MissingArguments)?;
        (entry.invoke)(conn, arguments).await
    }
}

/// JSON schema of `P` as the object rmcp expects
fn input_schema<P: JsonSchema>() -> Arc<JsonObject> {
    match serde_json::to_value(schemars::schema_for!(P)) {
        Ok(Value::Object(map)) => Arc::new(map),
        _ => Arc::new(JsonObject::new()),
    }
}
