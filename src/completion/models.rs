//! Task Completion Domain Models

use serde::Deserialize;
use serde_json::Value;

/// Name of the completion tool
pub const TOOL_NAME: &str = "attempt_completion";
/// Description advertised by `tools/list`
pub const TOOL_DESCRIPTION: &str = "Signal that a task has been completed with a result summary";

/// Input for the attempt_completion tool
///
/// `result` is declared required in the advertised schema but is not
/// enforced: a missing value reads as the empty string.
#[derive(Debug, Deserialize)]
pub struct AttemptCompletionInput {
    /// Summary of what was accomplished
    #[serde(default)]
    pub result: Option<Value>,
}

impl AttemptCompletionInput {
    /// The summary as text. Non-string values are rendered as compact JSON.
    pub fn summary(&self) -> String {
        match &self.result {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}
