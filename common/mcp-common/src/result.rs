//! Result helpers for MCP tool responses
//!
//! Every tool response carries exactly one text content item: pretty JSON on
//! success, a single human-readable line on failure.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

/// Serialize `data` as indented JSON
pub fn pretty_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}

/// Create a successful plain text response
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Create a tool-level error response
///
/// The call itself succeeds at the protocol level; `is_error` tells the
/// client the tool failed and `text` explains why.
pub fn text_error(text: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(text.into())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[derive(Serialize)]
    struct TestData {
        name: String,
        value: i32,
    }

    fn only_text(result: &CallToolResult) -> &str {
        assert_eq!(result.content.len(), 1);
        match &result.content[0].raw {
            RawContent::Text(t) => t.text.as_str(),
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_pretty_json_is_indented() {
        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };
        assert_eq!(
            pretty_json(&data).unwrap(),
            "{\n  \"name\": \"test\",\n  \"value\": 42\n}"
        );
    }

    #[test]
    fn test_text_error_sets_flag() {
        let result = text_error("Not Found: nope");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(only_text(&result), "Not Found: nope");
    }

    #[test]
    fn test_text_success() {
        let result = text_success("hello world");
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(only_text(&result), "hello world");
    }
}
