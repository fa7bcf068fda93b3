//! Tool node: answers every pending tool call on the latest assistant message

use crate::error::Result;
use crate::messages::Message;
use crate::nodes::{Node, NodeOutcome};
use crate::state::{AgentState, StateUpdate};
use crate::tool::{ToolOutcome, ToolRegistry, ToolRuntime};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Dispatches the tool calls requested by the latest assistant message, in
/// the order they appear, and appends one tool-result message per call.
///
/// A failing call does not abort the batch: its error is converted into a
/// tool-result message carrying the same call id, so the model can react on
/// its next turn. Control always returns to the model node afterwards.
pub struct ToolNode {
    registry: Arc<ToolRegistry>,
}

impl ToolNode {
    /// Create a tool node over a registry.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this node dispatches through.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}

#[async_trait]
impl Node for ToolNode {
    fn name(&self) -> &str {
        "tool"
    }

    async fn run(&self, state: &AgentState, _resume: Option<&Value>) -> Result<NodeOutcome> {
        let Some(last) = state.last_message() else {
            return Ok(NodeOutcome::Advance(StateUpdate::new()));
        };

        if !last.is_assistant() || !last.has_tool_calls() {
            // Normally unreachable: the planner routes here only when calls
            // are pending.
            debug!("no tool calls on the latest message; passing through");
            return Ok(NodeOutcome::Advance(StateUpdate::new()));
        }

        let calls = last.tool_calls().to_vec();
        let mut update = StateUpdate::new();

        // Every request gets exactly one result message, matched by call id.
        for call in calls {
            debug!(tool = %call.name, call_id = %call.id, "dispatching tool call");
            let runtime = ToolRuntime::new(&call.id, state.clone());

            match self
                .registry
                .execute(&call.name, call.args.clone(), runtime)
                .await
            {
                Ok(ToolOutcome::Value(value)) => {
                    let content =
                        serde_json::to_string(&value).unwrap_or_else(|_| value.to_string());
                    update.messages.push(Message::tool(content, &call.id));
                    update.tool_calls += 1;
                }
                Ok(ToolOutcome::Update(directive)) => {
                    let has_result = directive
                        .messages
                        .iter()
                        .any(|m| m.tool_call_id.as_deref() == Some(call.id.as_str()));
                    update.merge(directive);
                    if !has_result {
                        // The directive must still answer the call
                        update
                            .messages
                            .push(Message::tool(format!("{} completed", call.name), &call.id));
                    }
                    update.tool_calls += 1;
                }
                Err(error) => {
                    warn!(tool = %call.name, call_id = %call.id, error = %error, "tool call failed");
                    update
                        .messages
                        .push(Message::tool(format!("Tool error occurred: {}", error), &call.id));
                }
            }
        }

        Ok(NodeOutcome::Advance(update))
    }
}
