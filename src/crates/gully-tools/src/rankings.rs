//! Team ranking lookups

use async_trait::async_trait;
use gully_graph::tool::{Tool, ToolOutcome, ToolResult, ToolRuntime};
use serde_json::{json, Value};

/// Fetches the current team rankings.
pub struct TeamRankings;

#[async_trait]
impl Tool for TeamRankings {
    fn name(&self) -> &str {
        "get_team_rankings"
    }

    fn description(&self) -> &str {
        "Fetches the current team rankings."
    }

    async fn execute(&self, _input: Value, _runtime: ToolRuntime) -> ToolResult {
        Ok(ToolOutcome::Value(json!([
            {"team": "India", "rank": 1},
            {"team": "Australia", "rank": 2},
            {"team": "England", "rank": 3},
            {"team": "New Zealand", "rank": 4},
            {"team": "Pakistan", "rank": 5},
            {"team": "South Africa", "rank": 6},
        ])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gully_graph::state::AgentState;

    #[tokio::test]
    async fn test_india_leads_rankings() {
        let outcome = TeamRankings
            .execute(json!({}), ToolRuntime::new("c1", AgentState::new()))
            .await
            .unwrap();

        match outcome {
            ToolOutcome::Value(value) => {
                assert_eq!(value[0]["team"], "India");
                assert_eq!(value[0]["rank"], 1);
                assert_eq!(value.as_array().unwrap().len(), 6);
            }
            ToolOutcome::Update(_) => panic!("expected a plain value"),
        }
    }
}
