//! Task Completion Domain Module
//!
//! This module contains the `attempt_completion` tool:
//! - Domain models (tool input, constants)
//! - The tool handler and its registry entry

pub mod handlers;
pub mod models;

pub use handlers::{attempt_completion, tool};
pub use models::TOOL_NAME;
