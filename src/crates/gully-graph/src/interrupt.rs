//! Human-in-the-loop interrupts
//!
//! A node suspends a run by producing an [`Interrupt`] instead of a state
//! update: a unique id plus an opaque JSON payload, conventionally carrying a
//! `"prompt"` field for display. The runtime persists the pause point and
//! surfaces the token to the caller; the caller answers with a [`ResumeMap`]
//! keyed by the interrupt id. Each token is consumed exactly once - resuming
//! a run that has already advanced past it is an error, not a repeat.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use uuid::Uuid;

/// Resume values keyed by interrupt id.
pub type ResumeMap = HashMap<String, Value>;

/// A cooperative suspension point surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interrupt {
    /// Unique id, the key the resume value is supplied under
    pub id: String,

    /// Opaque payload; conventionally `{"message": ..., "prompt": ...}`
    pub value: Value,
}

impl Interrupt {
    /// Create an interrupt with the given payload.
    pub fn new(value: Value) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            value,
        }
    }

    /// Create an interrupt requesting operator input, with matching
    /// message/prompt fields in the payload.
    pub fn request_input(message: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self::new(json!({
            "message": message.into(),
            "prompt": prompt.into(),
        }))
    }

    /// The human-readable prompt for this interrupt: the payload's `"prompt"`
    /// field when present, the payload itself rendered as text otherwise.
    pub fn prompt(&self) -> String {
        match self.value.get("prompt").and_then(Value::as_str) {
            Some(prompt) => prompt.to_string(),
            None => match &self.value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = Interrupt::new(json!("x"));
        let b = Interrupt::new(json!("x"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_prompt_from_payload_field() {
        let interrupt = Interrupt::request_input(
            "Enter your preferred team:",
            "Please enter your preferred team: ",
        );
        assert_eq!(interrupt.prompt(), "Please enter your preferred team: ");
    }

    #[test]
    fn test_prompt_falls_back_to_payload() {
        let plain = Interrupt::new(json!("Provide a value"));
        assert_eq!(plain.prompt(), "Provide a value");

        let object = Interrupt::new(json!({"reason": "missing field"}));
        assert!(object.prompt().contains("missing field"));
    }

    #[test]
    fn test_serde_round_trip() {
        let interrupt = Interrupt::request_input("m", "p");
        let value = serde_json::to_value(&interrupt).unwrap();
        let back: Interrupt = serde_json::from_value(value).unwrap();
        assert_eq!(back, interrupt);
    }
}
