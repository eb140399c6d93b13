//! Static tool registry
//!
//! Maps tool names to a descriptor plus handler. Built once at startup and
//! read-only afterwards; adding a tool means adding an entry here, the
//! dispatcher does not change.

use super::models::{ToolCallResult, ToolDescriptor};
use crate::error::McpResult;
use serde_json::Value;

/// What a tool handler is allowed to know about the server
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolContext {
    /// Whether informational lines may be emitted
    pub verbose: bool,
}

/// Tool implementation: receives the raw `arguments` value
pub type ToolHandler = fn(&ToolContext, Value) -> McpResult<ToolCallResult>;

/// A registered tool
#[derive(Clone)]
pub struct Tool {
    pub descriptor: ToolDescriptor,
    pub handler: ToolHandler,
}

impl std::fmt::Debug for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Ordered registry of tools
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Tool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every tool this service ships with
    pub fn builtin() -> Self {
        Self::new().with_tool(crate::completion::tool())
    }

    pub fn with_tool(mut self, tool: Tool) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.descriptor.name == name)
    }

    /// Descriptors in registration order
    pub fn descriptors(&self) -> Vec<&ToolDescriptor> {
        self.tools.iter().map(|t| &t.descriptor).collect()
    }
}
