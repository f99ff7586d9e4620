//! Tool-level error kinds and the single formatter every failure passes through
//!
//! Adapters return [`ToolError`]; the dispatch router turns it into the one
//! line of text the caller sees via [`ToolError::to_response_text`].

use thiserror::Error;

use crate::ado::ApiError;

/// Errors a tool call can end with
#[derive(Error, Debug)]
pub enum ToolError {
    /// A single-entity fetch came back empty
    #[error("{0}")]
    NotFound(String),

    /// Arguments failed schema validation or enum translation
    #[error("{0}")]
    Validation(String),

    /// Credentials were missing or rejected
    #[error("{0}")]
    Authentication(String),

    /// Generic Azure DevOps domain error
    #[error("{0}")]
    Api(String),

    /// A remote call failed while performing `operation`
    #[error("Failed to {operation}: {message}")]
    RemoteOperationFailed {
        /// Verb phrase naming the attempted operation, e.g. "get pull request"
        operation: &'static str,
        /// Text of the underlying failure
        message: String,
    },

    /// No handler is registered under this tool name
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The request carried no argument object at all
    #[error("Arguments are required")]
    MissingArguments,

    /// Anything else, e.g. a result that failed to serialize
    #[error("{0}")]
    Internal(String),
}

/// Result type alias for tool adapters
pub type ToolResult<T> = Result<T, ToolError>;

impl ToolError {
    /// Wrap a remote failure for `operation`
    ///
    /// Meant for `map_err`: `.map_err(ToolError::remote("get pull request"))`.
    pub fn remote(operation: &'static str) -> impl FnOnce(ApiError) -> ToolError {
        move |e| ToolError::RemoteOperationFailed {
            operation,
            message: e.to_string(),
        }
    }

    /// Short kind label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::NotFound(_) => "not_found",
            ToolError::Validation(_) => "validation",
            ToolError::Authentication(_) => "authentication",
            ToolError::Api(_) => "api",
            ToolError::RemoteOperationFailed { .. } => "remote_operation_failed",
            ToolError::UnknownTool(_) => "unknown_tool",
            ToolError::MissingArguments => "missing_arguments",
            ToolError::Internal(_) => "internal",
        }
    }

    /// Render the caller-facing line, prefixed by error kind
    pub fn to_response_text(&self) -> String {
        match self {
            ToolError::NotFound(msg) => format!("Not Found: {}", msg),
            ToolError::Validation(msg) => format!("Validation Error: {}", msg),
            ToolError::Authentication(msg) => format!("Authentication Failed: {}", msg),
            ToolError::Api(msg) => format!("Azure DevOps API Error: {}", msg),
            ToolError::UnknownTool(_) | ToolError::MissingArguments => self.to_string(),
            ToolError::RemoteOperationFailed { .. } | ToolError::Internal(_) => {
                format!("Error: {}", self)
            }
        }
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(e: serde_json::Error) -> Self {
        ToolError::Internal(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(
            ToolError::NotFound("Resource not found".into()).to_response_text(),
            "Not Found: Resource not found"
        );
        assert_eq!(
            ToolError::Validation("Validation failed".into()).to_response_text(),
            "Validation Error: Validation failed"
        );
        assert_eq!(
            ToolError::Authentication("Authentication failed".into()).to_response_text(),
            "Authentication Failed: Authentication failed"
        );
        assert_eq!(
            ToolError::Api("Test error".into()).to_response_text(),
            "Azure DevOps API Error: Test error"
        );
        assert_eq!(
            ToolError::UnknownTool("unknown_tool".into()).to_response_text(),
            "Unknown tool: unknown_tool"
        );
        assert_eq!(
            ToolError::MissingArguments.to_response_text(),
            "Arguments are required"
        );
        assert_eq!(
            ToolError::Internal("Generic error".into()).to_response_text(),
            "Error: Generic error"
        );
    }

    #[test]
    fn test_remote_wraps_with_operation() {
        let err = ToolError::remote("get pull request")(ApiError::Http {
            status: 500,
            message: "boom".into(),
        });
        assert_eq!(err.kind(), "remote_operation_failed");
        assert_eq!(
            err.to_response_text(),
            "Error: Failed to get pull request: Azure DevOps returned HTTP 500: boom"
        );
    }
}
