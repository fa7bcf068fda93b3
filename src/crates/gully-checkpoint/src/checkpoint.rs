//! Checkpoint data structures
//!
//! A [`Checkpoint`] is the unit of persistence for one conversation session:
//! the full serialized session state, a step counter, and - when the run is
//! suspended waiting on external input - the serialized resume point the
//! runtime re-enters from. The graph runtime overwrites the checkpoint after
//! every node execution step, so the store always holds the latest snapshot
//! for each session id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Snapshot of one session's state, keyed by session id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Session this checkpoint belongs to
    pub session_id: String,

    /// Number of node execution steps completed when this snapshot was taken
    pub step: usize,

    /// Serialized session state
    pub state: Value,

    /// Serialized paused-point marker, present while the run is suspended
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_point: Option<Value>,

    /// When this snapshot was written
    pub created_at: DateTime<Utc>,
}

impl Checkpoint {
    /// Create a checkpoint for the given session and state.
    pub fn new(session_id: impl Into<String>, step: usize, state: Value) -> Self {
        Self {
            session_id: session_id.into(),
            step,
            state,
            resume_point: None,
            created_at: Utc::now(),
        }
    }

    /// Attach a resume point marker to this checkpoint.
    pub fn with_resume_point(mut self, resume_point: Value) -> Self {
        self.resume_point = Some(resume_point);
        self
    }

    /// Whether this checkpoint marks a suspended run.
    pub fn is_paused(&self) -> bool {
        self.resume_point.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_checkpoint_new() {
        let cp = Checkpoint::new("session-1", 3, json!({"messages": []}));

        assert_eq!(cp.session_id, "session-1");
        assert_eq!(cp.step, 3);
        assert!(!cp.is_paused());
    }

    #[test]
    fn test_checkpoint_resume_point() {
        let cp = Checkpoint::new("session-1", 1, json!({}))
            .with_resume_point(json!({"node": "model"}));

        assert!(cp.is_paused());
        assert_eq!(cp.resume_point.unwrap()["node"], "model");
    }

    #[test]
    fn test_checkpoint_serialization_round_trip() {
        let cp = Checkpoint::new("session-9", 2, json!({"model_calls": 2}))
            .with_resume_point(json!({"interrupt_id": "abc"}));

        let bytes = serde_json::to_vec(&cp).unwrap();
        let restored: Checkpoint = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(restored.session_id, cp.session_id);
        assert_eq!(restored.step, cp.step);
        assert_eq!(restored.state, cp.state);
        assert_eq!(restored.resume_point, cp.resume_point);
    }
}
