//! Preferred-team read and update tools
//!
//! `update_preferred_team` demonstrates the state-update directive: instead
//! of a plain value it returns a `StateUpdate` setting the session field and
//! carrying its own tool-result message for the originating call id.

use async_trait::async_trait;
use gully_graph::messages::Message;
use gully_graph::state::StateUpdate;
use gully_graph::tool::{Tool, ToolError, ToolOutcome, ToolResult, ToolRuntime};
use serde_json::{json, Value};
use tracing::info;

/// Retrieves the user's preferred team from the session state.
pub struct GetPreferredTeam;

#[async_trait]
impl Tool for GetPreferredTeam {
    fn name(&self) -> &str {
        "get_preferred_team"
    }

    fn description(&self) -> &str {
        "Retrieves the user's preferred team."
    }

    async fn execute(&self, _input: Value, runtime: ToolRuntime) -> ToolResult {
        let team = runtime
            .state
            .preferred_team
            .clone()
            .unwrap_or_else(|| "No preferred team set".to_string());
        Ok(ToolOutcome::Value(json!(team)))
    }
}

/// Updates the user's preferred team as a side effect of the call.
pub struct UpdatePreferredTeam;

#[async_trait]
impl Tool for UpdatePreferredTeam {
    fn name(&self) -> &str {
        "update_preferred_team"
    }

    fn description(&self) -> &str {
        "Updates the user's preferred team."
    }

    fn input_schema(&self) -> Option<Value> {
        Some(json!({
            "type": "object",
            "properties": {
                "team_name": {
                    "type": "string",
                    "description": "The team to store as the user's preference"
                }
            },
            "required": ["team_name"]
        }))
    }

    fn validate_input(&self, input: &Value) -> Result<(), ToolError> {
        match input.get("team_name").and_then(Value::as_str) {
            Some(team) if !team.trim().is_empty() => Ok(()),
            _ => Err(ToolError::InvalidInput {
                tool: self.name().to_string(),
                error: "'team_name' is required".to_string(),
            }),
        }
    }

    async fn execute(&self, input: Value, runtime: ToolRuntime) -> ToolResult {
        let team = input["team_name"].as_str().unwrap_or_default().to_string();
        info!(team = %team, "updating preferred team");

        Ok(ToolOutcome::Update(
            StateUpdate::new()
                .with_preferred_team(team.clone())
                .with_message(Message::tool(
                    format!("Preferred team updated to {}", team),
                    runtime.tool_call_id,
                )),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gully_graph::state::AgentState;

    #[tokio::test]
    async fn test_get_reads_session_field() {
        let mut state = AgentState::new();
        state.preferred_team = Some("India".to_string());

        let outcome = GetPreferredTeam
            .execute(json!({}), ToolRuntime::new("c1", state))
            .await
            .unwrap();

        match outcome {
            ToolOutcome::Value(value) => assert_eq!(value, json!("India")),
            ToolOutcome::Update(_) => panic!("expected a plain value"),
        }
    }

    #[tokio::test]
    async fn test_get_reports_unset_field() {
        let outcome = GetPreferredTeam
            .execute(json!({}), ToolRuntime::new("c1", AgentState::new()))
            .await
            .unwrap();

        match outcome {
            ToolOutcome::Value(value) => assert_eq!(value, json!("No preferred team set")),
            ToolOutcome::Update(_) => panic!("expected a plain value"),
        }
    }

    #[tokio::test]
    async fn test_update_returns_directive_with_result_message() {
        let outcome = UpdatePreferredTeam
            .execute(
                json!({"team_name": "England"}),
                ToolRuntime::new("call_7", AgentState::new()),
            )
            .await
            .unwrap();

        match outcome {
            ToolOutcome::Update(update) => {
                assert_eq!(update.preferred_team.as_deref(), Some("England"));
                assert_eq!(update.messages.len(), 1);
                assert_eq!(update.messages[0].tool_call_id.as_deref(), Some("call_7"));
                assert!(update.messages[0].content.contains("England"));
            }
            ToolOutcome::Value(_) => panic!("expected an update directive"),
        }
    }

    #[test]
    fn test_update_rejects_blank_team() {
        let err = UpdatePreferredTeam
            .validate_input(&json!({"team_name": "  "}))
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidInput { .. }));
    }
}
