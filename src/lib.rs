//! Completion Service Library
//!
//! This library provides a minimal MCP (Model Context Protocol) server that
//! exposes a single `attempt_completion` tool over line-delimited JSON-RPC.

// Domain modules
pub mod completion;
pub mod mcp;

// Infrastructure
pub mod config;
pub mod error;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use config::Settings;
pub use error::{McpError, McpResult};
