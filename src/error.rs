//! Error types for the completion service

use thiserror::Error;

/// JSON-RPC error code used for every failure the service reports.
pub const ERROR_CODE: i32 = -1;

/// Result type for MCP operations
pub type McpResult<T> = Result<T, McpError>;

/// Errors that can occur while serving requests
#[derive(Debug, Error)]
pub enum McpError {
    /// IO error (input or output stream)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A line on the input stream could not be parsed as JSON
    #[error("Invalid JSON")]
    InvalidJson,

    /// The parsed value is not a well-formed request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Method outside the supported set
    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    /// `tools/call` named a tool missing from the registry
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// `params` has the wrong shape
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// Tool `arguments` have the wrong shape
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl McpError {
    /// JSON-RPC error code for this error. The taxonomy is flat.
    pub fn error_code(&self) -> i32 {
        ERROR_CODE
    }

    /// Get error message for JSON-RPC response
    pub fn message(&self) -> String {
        self.to_string()
    }
}
