//! End-to-end scenarios for the assembled cricket agent.

use async_trait::async_trait;
use gully_agent::{build_agent, build_agent_with, ScriptedModel};
use gully_checkpoint::InMemorySaver;
use gully_graph::{
    AgentState, Message, ResumeMap, RunResult, Tool, ToolError, ToolResult, ToolRuntime,
};
use serde_json::{json, Value};
use std::sync::Arc;

struct BrokenLiveScores;

#[async_trait]
impl Tool for BrokenLiveScores {
    fn name(&self) -> &str {
        "get_live_scores"
    }

    fn description(&self) -> &str {
        "Fetches live scores"
    }

    async fn execute(&self, _input: Value, _runtime: ToolRuntime) -> ToolResult {
        Err(ToolError::ExecutionFailed {
            tool: "get_live_scores".to_string(),
            error: "score feed timed out".to_string(),
        })
    }
}

fn opening() -> AgentState {
    AgentState::with_messages(vec![Message::human("Can you introduce yourself?")])
}

fn with_team(content: &str) -> AgentState {
    let mut state = AgentState::with_messages(vec![Message::human(content)]);
    state.preferred_team = Some("India".to_string());
    state
}

fn settled(result: RunResult) -> AgentState {
    match result {
        RunResult::Settled(state) => state,
        RunResult::Paused { .. } => panic!("expected a settled run"),
    }
}

// Scenario A: no preferred team set. The first run pauses prompting for one;
// resuming with "India" carries the run to a settled assistant reply with the
// session field written.
#[tokio::test]
async fn scenario_a_interrupt_then_resume() {
    let agent = build_agent(Arc::new(ScriptedModel::new()));

    let result = agent.invoke(opening(), "session-a").await.unwrap();

    let interrupt = match &result {
        RunResult::Paused { interrupts, .. } => {
            assert_eq!(interrupts.len(), 1);
            assert!(interrupts[0].prompt().to_lowercase().contains("team"));
            interrupts[0].clone()
        }
        RunResult::Settled(_) => panic!("expected a paused run"),
    };

    let mut resume = ResumeMap::new();
    resume.insert(interrupt.id, json!("India"));

    let state = settled(agent.resume("session-a", resume).await.unwrap());

    assert_eq!(state.preferred_team.as_deref(), Some("India"));
    assert!(state.model_calls >= 1);
    assert!(state.last_message().unwrap().is_assistant());
    assert!(state
        .last_message()
        .unwrap()
        .content
        .contains("cricket assistant"));
}

// Scenario B: a rankings question produces one get_team_rankings call; the
// tool node answers it by call id and control returns to the model.
#[tokio::test]
async fn scenario_b_tool_round_trip() {
    let agent = build_agent(Arc::new(ScriptedModel::new()));

    let state = settled(
        agent
            .invoke(with_team("Show me the team rankings"), "session-b")
            .await
            .unwrap(),
    );

    let request = state
        .messages
        .iter()
        .find(|m| m.is_assistant() && m.has_tool_calls())
        .expect("assistant message carrying the tool call");
    assert_eq!(request.tool_calls()[0].name, "get_team_rankings");

    let tool_messages: Vec<_> = state.messages.iter().filter(|m| m.is_tool()).collect();
    assert_eq!(tool_messages.len(), 1);
    assert_eq!(
        tool_messages[0].tool_call_id.as_deref(),
        Some(request.tool_calls()[0].id.as_str())
    );

    assert_eq!(state.tool_calls, 1);
    assert_eq!(state.model_calls, 2);
    assert!(state.last_message().unwrap().is_assistant());
    assert!(state.last_message().unwrap().content.contains("India"));
}

// Scenario C: the tool invocation fails; the failure is fed back into the
// conversation as an error-bearing result and the run still settles.
#[tokio::test]
async fn scenario_c_tool_failure_still_settles() {
    let mut registry = gully_tools::registry();
    registry.register(Arc::new(BrokenLiveScores));
    let agent = build_agent_with(
        Arc::new(ScriptedModel::new()),
        registry,
        Arc::new(InMemorySaver::new()),
    );

    let state = settled(
        agent
            .invoke(with_team("What are the live scores?"), "session-c")
            .await
            .unwrap(),
    );

    let tool_message = state
        .messages
        .iter()
        .find(|m| m.is_tool())
        .expect("error-bearing tool result");
    assert!(tool_message.content.contains("Tool error occurred"));
    assert!(tool_message.content.contains("score feed timed out"));

    // The model saw the failure and still closed the conversation
    assert!(state.last_message().unwrap().is_assistant());
}

// A call to a tool that was never registered degrades the same way: an error
// result message, not an aborted run.
#[tokio::test]
async fn unknown_tool_degrades_to_error_result() {
    // The standard registry has no live-scores tool
    let agent = build_agent(Arc::new(ScriptedModel::new()));

    let state = settled(
        agent
            .invoke(with_team("What are the live scores?"), "session-d")
            .await
            .unwrap(),
    );

    let tool_message = state.messages.iter().find(|m| m.is_tool()).unwrap();
    assert!(tool_message.content.contains("not found"));
    assert!(state.last_message().unwrap().is_assistant());
}

// Multi-turn continuation: the caller appends the next human message to the
// settled state and re-invokes under the same session id.
#[tokio::test]
async fn counters_accumulate_across_turns() {
    let agent = build_agent(Arc::new(ScriptedModel::new()));

    let mut state = settled(
        agent
            .invoke(with_team("Can you introduce yourself?"), "session-e")
            .await
            .unwrap(),
    );
    assert_eq!(state.model_calls, 1);

    state.push_message(Message::human("What are the upcoming matches?"));
    let state = settled(agent.invoke(state, "session-e").await.unwrap());

    assert_eq!(state.model_calls, 3);
    assert_eq!(state.tool_calls, 1);
    assert!(state
        .messages
        .iter()
        .any(|m| m.is_tool() && m.content.contains("India vs Australia")));
}
