//! Upcoming match listings

use async_trait::async_trait;
use gully_graph::tool::{Tool, ToolOutcome, ToolResult, ToolRuntime};
use serde_json::{json, Value};

/// Fetches the upcoming cricket matches.
pub struct UpcomingMatches;

#[async_trait]
impl Tool for UpcomingMatches {
    fn name(&self) -> &str {
        "get_upcoming_matches"
    }

    fn description(&self) -> &str {
        "Fetches the upcoming cricket matches."
    }

    async fn execute(&self, _input: Value, _runtime: ToolRuntime) -> ToolResult {
        Ok(ToolOutcome::Value(json!([
            {"match": "India vs Australia", "date": "2024-07-01"},
            {"match": "England vs New Zealand", "date": "2024-07-02"},
            {"match": "Pakistan vs South Africa", "date": "2024-07-03"},
        ])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gully_graph::state::AgentState;

    #[tokio::test]
    async fn test_lists_matches() {
        let outcome = UpcomingMatches
            .execute(json!({}), ToolRuntime::new("c1", AgentState::new()))
            .await
            .unwrap();

        match outcome {
            ToolOutcome::Value(value) => {
                assert_eq!(value.as_array().unwrap().len(), 3);
                assert_eq!(value[0]["match"], "India vs Australia");
            }
            ToolOutcome::Update(_) => panic!("expected a plain value"),
        }
    }
}
