//! Agent assembly: wires the cricket tool set and system prompt into the
//! graph runtime.

use gully_checkpoint::{CheckpointSaver, InMemorySaver};
use gully_graph::{AgentGraph, ChatModel, ModelNode, RetryPolicy, ToolNode, ToolRegistry};
use std::sync::Arc;

/// System instructions for the cricket assistant.
pub const SYSTEM_PROMPT: &str = "\
You are a helpful assistant that can answer cricket related questions.
Greet the user and ask them how you can help.
You can answer questions about cricket rules, players, teams, matches, and history.
You can also provide live scores and updates if asked.
Always be polite and informative in your responses.";

/// Build the cricket agent with the standard tool set and an in-memory
/// checkpoint store.
pub fn build_agent(model: Arc<dyn ChatModel>) -> AgentGraph {
    build_agent_with(model, gully_tools::registry(), Arc::new(InMemorySaver::new()))
}

/// Build the cricket agent over a custom registry and checkpoint store.
///
/// The tool node carries a bounded retry: three attempts with a fixed
/// one-second inter-attempt delay.
pub fn build_agent_with(
    model: Arc<dyn ChatModel>,
    registry: ToolRegistry,
    saver: Arc<dyn CheckpointSaver>,
) -> AgentGraph {
    let registry = Arc::new(registry);
    let model_node =
        Arc::new(ModelNode::new(model, SYSTEM_PROMPT).with_tools(registry.definitions()));
    let tool_node = Arc::new(ToolNode::new(registry));

    AgentGraph::new(model_node, tool_node, saver).with_tool_retry(
        RetryPolicy::new(3)
            .with_initial_interval(1.0)
            .with_backoff_factor(1.0)
            .with_jitter(false),
    )
}
