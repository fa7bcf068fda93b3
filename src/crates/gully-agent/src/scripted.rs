//! Deterministic stand-in model for the demo binary and end-to-end tests
//!
//! Real API integration is deliberately out of scope; [`ScriptedModel`]
//! implements [`ChatModel`] with canned behavior that exercises the whole
//! graph: it greets, issues tool calls when the user asks about rankings,
//! matches, or live scores, and summarizes tool results on the following
//! turn.

use async_trait::async_trait;
use gully_graph::{
    ChatModel, ChatRequest, ChatResponse, Message, MessageRole, Result, ToolCall,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Canned chat model with deterministic tool-calling behavior.
pub struct ScriptedModel {
    call_counter: AtomicUsize,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self {
            call_counter: AtomicUsize::new(0),
        }
    }

    fn next_call_id(&self) -> String {
        let n = self.call_counter.fetch_add(1, Ordering::SeqCst);
        format!("call_{}", n)
    }

    fn tool_for_question(question: &str) -> Option<&'static str> {
        let question = question.to_lowercase();
        if question.contains("rank") {
            Some("get_team_rankings")
        } else if question.contains("live score") {
            Some("get_live_scores")
        } else if question.contains("match") {
            Some("get_upcoming_matches")
        } else {
            None
        }
    }
}

impl Default for ScriptedModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        // Extraction requests get a structured JSON reply
        let is_extraction = request
            .messages
            .first()
            .map(|m| {
                m.role == MessageRole::System && m.content.contains("extract structured")
            })
            .unwrap_or(false);
        if is_extraction {
            let source = request
                .messages
                .iter()
                .rev()
                .find(|m| m.role == MessageRole::Human)
                .and_then(|m| m.content.split("\n\n").nth(1))
                .unwrap_or_default();
            let payload = json!({"type": "chat", "content": source});
            return Ok(ChatResponse::new(Message::ai(payload.to_string())));
        }

        // A tool result as the latest message means the previous turn's call
        // was answered; close the loop with a summary.
        if let Some(last) = request.messages.last() {
            if last.role == MessageRole::Tool {
                let reply = if last.content.contains("error") {
                    "I couldn't reach that data source just now, sorry. \
                     Is there anything else I can help with?"
                        .to_string()
                } else {
                    format!("Here is what I found: {}", last.content)
                };
                return Ok(ChatResponse::new(Message::ai(reply)));
            }
        }

        let question = request
            .messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::Human)
            .map(|m| m.content.clone())
            .unwrap_or_default();

        if question.to_lowercase().contains("introduce") {
            return Ok(ChatResponse::new(Message::ai(
                "Hello! I'm your cricket assistant. I can tell you about rules, players, \
                 teams, rankings, and upcoming matches. How can I help?",
            )));
        }

        if let Some(tool) = Self::tool_for_question(&question) {
            return Ok(ChatResponse::new(
                Message::ai("Let me look that up for you.").with_tool_calls(vec![
                    ToolCall::new(self.next_call_id(), tool, json!({})),
                ]),
            ));
        }

        Ok(ChatResponse::new(Message::ai(
            "That's a fine cricket question - a production model would answer it in depth. \
             Try asking about team rankings or upcoming matches.",
        )))
    }
}
