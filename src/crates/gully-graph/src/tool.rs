//! Tool dispatch for agent workflows
//!
//! Tools are the actions the model can request. Each tool declares a name and
//! an optional argument schema, and is dispatched through a [`ToolRegistry`] -
//! an explicit value constructed once and handed to the runtime, never an
//! ambient global. Lookups are case-insensitive: names are normalized to
//! lowercase on both register and lookup.
//!
//! A tool normally returns a plain JSON value, but it may instead return a
//! **state-update directive** ([`ToolOutcome::Update`]) when it wants to
//! mutate session fields as a side effect of its call - e.g. storing a
//! preference. Failures are values, not exceptions: dispatch returns
//! `Result<ToolOutcome, ToolError>` and the tool node decides how to recover.
//!
//! # Implementing a tool
//!
//! ```rust
//! use gully_graph::tool::{Tool, ToolOutcome, ToolResult, ToolRuntime};
//! use async_trait::async_trait;
//! use serde_json::{json, Value};
//!
//! struct Echo;
//!
//! #[async_trait]
//! impl Tool for Echo {
//!     fn name(&self) -> &str {
//!         "echo"
//!     }
//!
//!     fn description(&self) -> &str {
//!         "Echoes its input back"
//!     }
//!
//!     async fn execute(&self, input: Value, _runtime: ToolRuntime) -> ToolResult {
//!         Ok(ToolOutcome::Value(json!({ "echo": input })))
//!     }
//! }
//! ```

use crate::llm::ToolDefinition;
use crate::state::{AgentState, StateUpdate};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Result of a tool dispatch
pub type ToolResult = std::result::Result<ToolOutcome, ToolError>;

/// Errors that can occur during tool dispatch
#[derive(Debug, Error, Clone)]
pub enum ToolError {
    /// Tool not found in registry
    #[error("Tool '{0}' not found. Available tools: {1}")]
    NotFound(String, String),

    /// Invalid tool arguments
    #[error("Invalid input for tool '{tool}': {error}")]
    InvalidInput { tool: String, error: String },

    /// Tool execution failed
    #[error("Tool '{tool}' execution failed: {error}")]
    ExecutionFailed { tool: String, error: String },
}

/// A structured request from the model to invoke a named tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique identifier for this call, echoed back on the result message
    pub id: String,

    /// Name of the tool to invoke
    pub name: String,

    /// Arguments as a JSON object
    pub args: Value,
}

impl ToolCall {
    /// Create a new tool call.
    pub fn new(id: impl Into<String>, name: impl Into<String>, args: Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            args,
        }
    }
}

/// Per-call context injected into a tool execution: the originating call id
/// and a snapshot of the session state for tools that read session fields.
#[derive(Debug, Clone)]
pub struct ToolRuntime {
    /// Id of the tool call being serviced
    pub tool_call_id: String,

    /// Snapshot of the session state at dispatch time
    pub state: AgentState,
}

impl ToolRuntime {
    /// Create a runtime context for one call.
    pub fn new(tool_call_id: impl Into<String>, state: AgentState) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            state,
        }
    }
}

/// What a tool hands back: a plain result value, or a directive asking the
/// runtime to apply a state update (which must include the tool's own result
/// message).
#[derive(Debug, Clone)]
pub enum ToolOutcome {
    /// Plain result value, serialized into a tool-result message
    Value(Value),

    /// State-update directive with side effects on session fields
    Update(StateUpdate),
}

/// A callable tool with a declared name and argument schema.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name, matched case-insensitively at dispatch
    fn name(&self) -> &str;

    /// Human-readable description consumed by the model for call formatting
    fn description(&self) -> &str;

    /// JSON Schema for the tool's arguments, if it takes any
    fn input_schema(&self) -> Option<Value> {
        None
    }

    /// Validate arguments before execution
    fn validate_input(&self, _input: &Value) -> std::result::Result<(), ToolError> {
        Ok(())
    }

    /// Execute the tool with the given arguments
    async fn execute(&self, input: Value, runtime: ToolRuntime) -> ToolResult;

    /// The definition published to the model collaborator
    fn definition(&self) -> ToolDefinition {
        let mut def = ToolDefinition::new(self.name(), self.description());
        if let Some(schema) = self.input_schema() {
            def = def.with_parameters(schema);
        }
        def
    }
}

/// Pure dispatch table from lowercase tool name to callable.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool under its lowercase name. A later registration with
    /// the same name replaces the earlier one.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_lowercase(), tool);
    }

    /// Look up a tool by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(&name.to_lowercase()).map(|t| t.as_ref())
    }

    /// Sorted list of registered tool names.
    pub fn list_tools(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Definitions for every registered tool, for binding to the model.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> =
            self.tools.values().map(|tool| tool.definition()).collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Dispatch a call: look up the tool, validate its input, execute.
    pub async fn execute(&self, name: &str, input: Value, runtime: ToolRuntime) -> ToolResult {
        let tool = self.get(name).ok_or_else(|| {
            ToolError::NotFound(name.to_string(), self.list_tools().join(", "))
        })?;

        tool.validate_input(&input)?;
        tool.execute(input, runtime).await
    }
}
