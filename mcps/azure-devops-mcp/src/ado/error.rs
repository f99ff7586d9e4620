//! Error types for Azure DevOps REST calls

use thiserror::Error;

/// Errors that can occur when talking to Azure DevOps
#[derive(Error, Debug)]
pub enum ApiError {
    /// The service answered with a non-success status
    #[error("Azure DevOps returned HTTP {status}: {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// The service's `message` field, or the raw body
        message: String,
    },

    /// Credentials were rejected (401, or the 203 sign-in page a bad PAT gets)
    #[error("Azure DevOps rejected the personal access token")]
    Unauthorized,

    /// Connection, TLS or timeout failure
    #[error("request to Azure DevOps failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body did not match the expected shape
    #[error("failed to parse Azure DevOps response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The organization URL could not be combined into a request URL
    #[error("invalid Azure DevOps URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Azure DevOps calls
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Build an [`ApiError::Http`] from a status and raw body
    ///
    /// Azure DevOps error bodies are `{"message": "...", "typeKey": ...}`;
    /// when the body is not that shape the trimmed text is used instead.
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or_else(|| body.trim().to_string());
        ApiError::Http { status, message }
    }
}
