//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC envelope construction.

use super::models::{JsonRpcResponse, Outcome, RpcError, JSONRPC_VERSION};
use crate::error::McpError;
use serde_json::Value;

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
pub fn rpc_success(id: Value, result: Value) -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: JSONRPC_VERSION,
        id,
        outcome: Outcome::Result(result),
    }
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The error code (always -1 in this service).
/// * `message` – Human-readable description of the error.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: JSONRPC_VERSION,
        id,
        outcome: Outcome::Error(RpcError {
            code,
            message: message.into(),
        }),
    }
}

/// Converts a service error into its error envelope.
pub fn rpc_failure(id: Value, err: &McpError) -> JsonRpcResponse {
    rpc_error(id, err.error_code(), err.message())
}
