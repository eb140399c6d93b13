//! MCP (Model Context Protocol) request dispatch
//!
//! This module routes a parsed JSON-RPC request to the handler for its
//! method and always answers with a response envelope. Any failure on the
//! way is folded into an error response at the top of [`Dispatcher::handle`].

use super::{helpers::*, models::*, registry::*};
use crate::config::Settings;
use crate::error::{McpError, McpResult};
use serde_json::{Map, Value};
use tracing::{debug, error};

/// The closed set of methods this server answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Initialize,
    ToolsList,
    ToolsCall,
}

impl Method {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "initialize" => Some(Self::Initialize),
            "tools/list" => Some(Self::ToolsList),
            "tools/call" => Some(Self::ToolsCall),
            _ => None,
        }
    }

    /// Routes a raw `method` member. Anything that is not one of the known
    /// names comes back as `UnknownMethod` carrying its rendering.
    pub fn from_value(method: Option<&Value>) -> McpResult<Self> {
        match method {
            Some(Value::String(name)) => {
                Self::parse(name).ok_or_else(|| McpError::UnknownMethod(name.clone()))
            }
            Some(other) => Err(McpError::UnknownMethod(other.to_string())),
            None => Err(McpError::UnknownMethod(Value::Null.to_string())),
        }
    }
}

/// Stateless request router over a fixed tool registry
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: ToolRegistry,
    verbose: bool,
}

impl Dispatcher {
    /// Dispatcher over the built-in tools
    pub fn new(settings: &Settings) -> Self {
        Self::with_registry(ToolRegistry::builtin(), settings)
    }

    pub fn with_registry(registry: ToolRegistry, settings: &Settings) -> Self {
        Self {
            registry,
            verbose: settings.verbose,
        }
    }

    /// Handles one parsed request. Never fails: errors become error responses
    /// carrying the request id when it could be read, `null` otherwise.
    pub fn handle(&self, request: Value) -> JsonRpcResponse {
        let id = request_id(&request);

        match self.dispatch(request) {
            Ok(result) => rpc_success(id, result),
            Err(e) => {
                if self.verbose {
                    error!("Error handling request: {}", e);
                }
                rpc_failure(id, &e)
            }
        }
    }

    fn dispatch(&self, request: Value) -> McpResult<Value> {
        if !request.is_object() {
            return Err(McpError::InvalidRequest(format!(
                "expected an object, got {}",
                request
            )));
        }
        let request: JsonRpcRequest = serde_json::from_value(request)
            .map_err(|e| McpError::InvalidRequest(e.to_string()))?;

        if self.verbose {
            debug!("MCP Call: {:?} (id: {:?})", request.method, request.id);
        }

        let method = Method::from_value(request.method.as_ref())?;

        match method {
            Method::Initialize => Ok(serde_json::to_value(InitializeResult::default())?),
            Method::ToolsList => Ok(serde_json::to_value(ToolsListResult {
                tools: self.registry.descriptors(),
            })?),
            Method::ToolsCall => {
                let result = self.handle_tool_call(request.params)?;
                Ok(serde_json::to_value(result)?)
            }
        }
    }

    /// Handles `tools/call` params: looks the tool up by name and invokes it.
    pub fn handle_tool_call(&self, params: Option<Value>) -> McpResult<ToolCallResult> {
        let params: ToolCallParams = match params {
            None | Some(Value::Null) => ToolCallParams::default(),
            Some(p @ Value::Object(_)) => {
                serde_json::from_value(p).map_err(|e| McpError::InvalidParams(e.to_string()))?
            }
            Some(other) => {
                return Err(McpError::InvalidParams(format!(
                    "expected an object, got {}",
                    other
                )))
            }
        };

        let name = params.name.unwrap_or_default();
        let args = match params.arguments {
            None | Some(Value::Null) => Value::Object(Map::new()),
            Some(args @ Value::Object(_)) => args,
            Some(other) => {
                return Err(McpError::InvalidArguments(format!(
                    "expected an object, got {}",
                    other
                )))
            }
        };

        let tool = self
            .registry
            .get(&name)
            .ok_or(McpError::UnknownTool(name))?;

        (tool.handler)(&self.context(), args)
    }

    fn context(&self) -> ToolContext {
        ToolContext {
            verbose: self.verbose,
        }
    }
}

/// The request id, or `null` when the value has none
fn request_id(request: &Value) -> Value {
    request.get("id").cloned().unwrap_or(Value::Null)
}
