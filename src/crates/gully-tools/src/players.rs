//! Player statistics lookups

use async_trait::async_trait;
use gully_graph::tool::{Tool, ToolError, ToolOutcome, ToolResult, ToolRuntime};
use serde_json::{json, Value};

/// Fetches the stats for a given player.
pub struct PlayerStats;

impl PlayerStats {
    fn lookup(player_name: &str) -> Option<Value> {
        match player_name {
            "Virat Kohli" => Some(json!({"matches": 254, "runs": 12040, "average": 59.33})),
            "Steve Smith" => Some(json!({"matches": 128, "runs": 7540, "average": 61.80})),
            "Joe Root" => Some(json!({"matches": 150, "runs": 8300, "average": 52.45})),
            _ => None,
        }
    }
}

#[async_trait]
impl Tool for PlayerStats {
    fn name(&self) -> &str {
        "get_player_stats"
    }

    fn description(&self) -> &str {
        "Fetches the stats for a given player."
    }

    fn input_schema(&self) -> Option<Value> {
        Some(json!({
            "type": "object",
            "properties": {
                "player_name": {
                    "type": "string",
                    "description": "Full name of the player (e.g., 'Virat Kohli')"
                }
            },
            "required": ["player_name"]
        }))
    }

    fn validate_input(&self, input: &Value) -> Result<(), ToolError> {
        if input.get("player_name").and_then(Value::as_str).is_none() {
            return Err(ToolError::InvalidInput {
                tool: self.name().to_string(),
                error: "'player_name' is required".to_string(),
            });
        }
        Ok(())
    }

    async fn execute(&self, input: Value, _runtime: ToolRuntime) -> ToolResult {
        let player_name = input["player_name"].as_str().unwrap_or_default();

        let result = Self::lookup(player_name).unwrap_or_else(|| json!("Player not found"));
        Ok(ToolOutcome::Value(result))
    }
}
