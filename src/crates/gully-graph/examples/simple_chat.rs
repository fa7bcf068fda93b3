//! Minimal conversation loop: a model node, no tools, no interrupts.
//!
//! Run with: cargo run -p gully-graph --example simple_chat

use async_trait::async_trait;
use gully_checkpoint::InMemorySaver;
use gully_graph::{
    AgentGraph, AgentState, ChatModel, ChatRequest, ChatResponse, Message, ModelNode, Result,
    RunResult, ToolNode, ToolRegistry,
};
use std::sync::Arc;

const SYSTEM_PROMPT: &str = "You are a helpful assistant that can answer cricket related \
questions. Always be polite and informative in your responses.";

/// Stand-in model: greets once, then acknowledges each turn.
struct GreeterModel;

#[async_trait]
impl ChatModel for GreeterModel {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let reply = match request.messages.last() {
            Some(last) if last.content.contains("introduce") => {
                "Hello! I'm your cricket assistant. Ask me about rules, players, or rankings."
            }
            _ => "Good question - in a full deployment a real model would answer it.",
        };
        Ok(ChatResponse::new(Message::ai(reply)))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let model_node = Arc::new(ModelNode::new(Arc::new(GreeterModel), SYSTEM_PROMPT));
    let tool_node = Arc::new(ToolNode::new(Arc::new(ToolRegistry::new())));
    let graph = AgentGraph::new(model_node, tool_node, Arc::new(InMemorySaver::new()));

    let mut state = AgentState::with_messages(vec![Message::human(
        "Hello! Please introduce yourself.",
    )]);
    state.preferred_team = Some("India".to_string());

    for question in ["Who invented cricket?", "What is a googly?"] {
        state = match graph.invoke(state, "example-session").await? {
            RunResult::Settled(state) => state,
            RunResult::Paused { .. } => unreachable!("no interrupts in this example"),
        };
        println!("Agent: {}", state.last_message().unwrap().content);

        state.push_message(Message::human(question));
        println!("You:   {}", question);
    }

    let state = graph.invoke(state, "example-session").await?.into_state();
    println!("Agent: {}", state.last_message().unwrap().content);
    println!(
        "({} messages, {} model calls)",
        state.messages.len(),
        state.model_calls
    );

    Ok(())
}
