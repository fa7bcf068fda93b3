//! Routing decision after each model step
//!
//! The planner is the sole branching decision in the graph, and it is a pure
//! function of the latest message: pending tool calls route to the tool node,
//! anything else ends the run.

use crate::state::AgentState;

/// Where the run goes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Pending tool calls: run the tool node
    Tool,
    /// Nothing pending: the run is settled
    End,
}

/// Decide the next node from the latest message. No side effects.
pub fn route(state: &AgentState) -> Route {
    match state.last_message() {
        Some(message) if message.is_assistant() && message.has_tool_calls() => Route::Tool,
        _ => Route::End,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Message;
    use crate::tool::ToolCall;
    use serde_json::json;

    #[test]
    fn test_routes_to_tool_on_pending_calls() {
        let state = AgentState::with_messages(vec![
            Message::human("rankings please"),
            Message::ai("Checking.")
                .with_tool_calls(vec![ToolCall::new("c1", "get_team_rankings", json!({}))]),
        ]);

        assert_eq!(route(&state), Route::Tool);
    }

    #[test]
    fn test_routes_to_end_without_calls() {
        let state = AgentState::with_messages(vec![
            Message::human("hello"),
            Message::ai("Hello there!"),
        ]);

        assert_eq!(route(&state), Route::End);
    }

    #[test]
    fn test_non_assistant_latest_message_ends() {
        let state = AgentState::with_messages(vec![
            Message::ai("Checking.")
                .with_tool_calls(vec![ToolCall::new("c1", "get_team_rankings", json!({}))]),
            Message::tool("[]", "c1"),
        ]);

        // The pending calls were answered; the latest message is a tool result
        assert_eq!(route(&state), Route::End);
    }

    #[test]
    fn test_empty_history_ends() {
        assert_eq!(route(&AgentState::new()), Route::End);
    }

    #[test]
    fn test_is_deterministic() {
        let state = AgentState::with_messages(vec![Message::ai("done")]);
        assert_eq!(route(&state), route(&state));
    }
}
