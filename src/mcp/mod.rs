//! Model Context Protocol (MCP) Module
//!
//! This module contains all MCP protocol implementation, including:
//! - Protocol models (JsonRpcRequest, JsonRpcResponse, constants)
//! - RPC helpers (success/error envelopes)
//! - The static tool registry
//! - The dispatcher (initialize, tools/list, tools/call)

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod registry;

// Re-export commonly used types and functions
pub use handlers::{Dispatcher, Method};
pub use models::{JsonRpcResponse, ToolCallResult, ToolDescriptor};
pub use registry::{Tool, ToolContext, ToolRegistry};
