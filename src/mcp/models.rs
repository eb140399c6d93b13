//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) as spoken over line-delimited JSON-RPC.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// JSON-RPC protocol version carried by every response
pub const JSONRPC_VERSION: &str = "2.0";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";
/// Server identifier
pub const SERVER_NAME: &str = "completion-service";
/// Server version reported during the handshake
pub const SERVER_VERSION: &str = "1.0.0";

// =============================================================================
// JSON-RPC Envelopes
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke. Kept raw so a missing or non-string method
    /// can still be reported back.
    #[serde(default)]
    pub method: Option<Value>,

    /// Parameters for the method
    #[serde(default)]
    pub params: Option<Value>,

    /// Request identifier. Absent or null marks a notification.
    #[serde(default)]
    pub id: Option<Value>,
}

/// Structured failure carried in the `error` member of a response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

/// Exactly one of `result` or `error`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Result(Value),
    Error(RpcError),
}

/// Standard JSON-RPC 2.0 Response envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,

    /// Echo of the request id, or null when it could not be extracted
    pub id: Value,

    #[serde(flatten)]
    pub outcome: Outcome,
}

// =============================================================================
// MCP Payloads
// =============================================================================

/// Result of the `initialize` handshake
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: &'static str,
    pub capabilities: ServerCapabilities,
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: ToolsCapability,
}

/// Advertised as an empty object
#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl Default for InitializeResult {
    fn default() -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION,
            capabilities: ServerCapabilities {
                tools: ToolsCapability {},
            },
            server_info: ServerInfo {
                name: SERVER_NAME,
                version: SERVER_VERSION,
            },
        }
    }
}

/// Public description of a registered tool, as returned by `tools/list`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,

    /// JSON-Schema shaped description of the accepted arguments
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Result of `tools/list`
#[derive(Debug, Serialize)]
pub struct ToolsListResult<'a> {
    pub tools: Vec<&'a ToolDescriptor>,
}

/// Parameters of `tools/call`
#[derive(Debug, Default, Deserialize)]
pub struct ToolCallParams {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub arguments: Option<Value>,
}

/// A single content block in a tool result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text { text: String },
}

/// Content envelope returned by every tool
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolCallResult {
    pub content: Vec<Content>,
}

impl ToolCallResult {
    /// Single text block result
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
        }
    }
}
