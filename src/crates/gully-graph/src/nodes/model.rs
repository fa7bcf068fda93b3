//! Model node: the conversation's contact point with the language model

use crate::error::Result;
use crate::interrupt::Interrupt;
use crate::llm::{ChatModel, ChatRequest, ToolDefinition};
use crate::messages::Message;
use crate::nodes::{Node, NodeOutcome};
use crate::state::{AgentState, StateUpdate};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Invokes the model with the system instructions plus the full message
/// history, appending the reply and counting the invocation.
///
/// When the session's preferred team is unset, the node does not call the
/// model at all: it suspends with an interrupt prompting the operator. On
/// resume the supplied value is written into the session field and the node
/// proceeds to the model call - re-entry is deterministic, the field check
/// passes from then on.
pub struct ModelNode {
    model: Arc<dyn ChatModel>,
    system_prompt: String,
    tools: Vec<ToolDefinition>,
}

impl ModelNode {
    /// Create a model node with a system prompt and no bound tools.
    pub fn new(model: Arc<dyn ChatModel>, system_prompt: impl Into<String>) -> Self {
        Self {
            model,
            system_prompt: system_prompt.into(),
            tools: Vec::new(),
        }
    }

    /// Bind tool definitions published to the model.
    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }
}

#[async_trait]
impl Node for ModelNode {
    fn name(&self) -> &str {
        "model"
    }

    async fn run(&self, state: &AgentState, resume: Option<&Value>) -> Result<NodeOutcome> {
        let mut update = StateUpdate::new();

        if state.preferred_team.is_none() {
            match resume {
                Some(value) => {
                    let team = value
                        .as_str()
                        .map(str::to_string)
                        .unwrap_or_else(|| value.to_string());
                    debug!(team = %team, "preferred team supplied via resume");
                    update.preferred_team = Some(team);
                }
                None => {
                    debug!("preferred team unset; suspending for operator input");
                    return Ok(NodeOutcome::Suspend(Interrupt::request_input(
                        "Enter your preferred team:",
                        "Please enter your preferred team: ",
                    )));
                }
            }
        }

        let mut messages = Vec::with_capacity(state.messages.len() + 1);
        messages.push(Message::system(self.system_prompt.clone()));
        messages.extend(state.messages.iter().cloned());

        let request = ChatRequest::new(messages).with_tools(self.tools.clone());
        let response = self.model.chat(request).await?;

        debug!(
            tool_calls = response.message.tool_calls().len(),
            "model responded"
        );

        Ok(NodeOutcome::Advance(
            update.with_message(response.message).record_model_call(),
        ))
    }
}
