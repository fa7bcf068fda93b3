//! Session state threaded through every node
//!
//! [`AgentState`] is a fixed struct rather than a loosely-typed map: each
//! session field is an explicit `Option`, and the counters are plain
//! integers. Nodes never mutate state directly - they return a
//! [`StateUpdate`] that the runtime applies, so the two invariants hold by
//! construction:
//!
//! - the message history is append-only (updates concatenate, never replace)
//! - counters are monotonically non-decreasing (updates carry deltas)

use crate::messages::Message;
use serde::{Deserialize, Serialize};

/// The mutable record for one conversation session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentState {
    /// Ordered conversation history, append-only
    #[serde(default)]
    pub messages: Vec<Message>,

    /// The user's preferred team, unset until provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_team: Option<String>,

    /// Number of model invocations in this session
    #[serde(default)]
    pub model_calls: u32,

    /// Number of tool invocations in this session
    #[serde(default)]
    pub tool_calls: u32,
}

impl AgentState {
    /// Create an empty session state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session state seeded with an initial message history.
    pub fn with_messages(messages: Vec<Message>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    /// Append a message to the history.
    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// The most recent message, if any.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Apply a node's update: append its messages, set resumed fields,
    /// add counter deltas.
    pub fn apply(&mut self, update: StateUpdate) {
        self.messages.extend(update.messages);
        if let Some(team) = update.preferred_team {
            self.preferred_team = Some(team);
        }
        self.model_calls += update.model_calls;
        self.tool_calls += update.tool_calls;
    }
}

/// What a node hands back to the runtime: messages to append, session fields
/// to set, counter deltas to add.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateUpdate {
    /// Messages to append to the history
    #[serde(default)]
    pub messages: Vec<Message>,

    /// Set the preferred team if `Some`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_team: Option<String>,

    /// Model invocations performed by this step
    #[serde(default)]
    pub model_calls: u32,

    /// Tool invocations performed by this step
    #[serde(default)]
    pub tool_calls: u32,
}

impl StateUpdate {
    /// Create an empty update (a no-op when applied).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to this update.
    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Set the preferred team in this update.
    pub fn with_preferred_team(mut self, team: impl Into<String>) -> Self {
        self.preferred_team = Some(team.into());
        self
    }

    /// Record one model invocation.
    pub fn record_model_call(mut self) -> Self {
        self.model_calls += 1;
        self
    }

    /// Record one tool invocation.
    pub fn record_tool_call(mut self) -> Self {
        self.tool_calls += 1;
        self
    }

    /// Fold another update into this one, preserving message order.
    pub fn merge(&mut self, other: StateUpdate) {
        self.messages.extend(other.messages);
        if other.preferred_team.is_some() {
            self.preferred_team = other.preferred_team;
        }
        self.model_calls += other.model_calls;
        self.tool_calls += other.tool_calls;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{Message, MessageRole};

    #[test]
    fn test_apply_appends_messages() {
        let mut state = AgentState::with_messages(vec![Message::human("hi").with_id("m1")]);

        state.apply(StateUpdate::new().with_message(Message::ai("hello").with_id("m2")));

        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[0].id.as_deref(), Some("m1"));
        assert_eq!(state.messages[1].id.as_deref(), Some("m2"));
    }

    #[test]
    fn test_apply_sets_preferred_team_once() {
        let mut state = AgentState::new();

        state.apply(StateUpdate::new().with_preferred_team("India"));
        assert_eq!(state.preferred_team.as_deref(), Some("India"));

        // An update without the field leaves it untouched
        state.apply(StateUpdate::new().with_message(Message::ai("ok")));
        assert_eq!(state.preferred_team.as_deref(), Some("India"));
    }

    #[test]
    fn test_counters_accumulate() {
        let mut state = AgentState::new();

        state.apply(StateUpdate::new().record_model_call());
        state.apply(StateUpdate::new().record_tool_call().record_tool_call());
        state.apply(StateUpdate::new().record_model_call());

        assert_eq!(state.model_calls, 2);
        assert_eq!(state.tool_calls, 2);
    }

    #[test]
    fn test_merge_preserves_order() {
        let mut update = StateUpdate::new().with_message(Message::tool("a", "c1"));
        update.merge(
            StateUpdate::new()
                .with_message(Message::tool("b", "c2"))
                .with_preferred_team("England")
                .record_tool_call(),
        );

        assert_eq!(update.messages.len(), 2);
        assert_eq!(update.messages[0].tool_call_id.as_deref(), Some("c1"));
        assert_eq!(update.messages[1].tool_call_id.as_deref(), Some("c2"));
        assert_eq!(update.preferred_team.as_deref(), Some("England"));
        assert_eq!(update.tool_calls, 1);
    }

    #[test]
    fn test_last_message() {
        let mut state = AgentState::new();
        assert!(state.last_message().is_none());

        state.push_message(Message::human("first"));
        state.push_message(Message::ai("second"));
        assert_eq!(state.last_message().unwrap().role, MessageRole::Assistant);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_update() -> impl Strategy<Value = StateUpdate> {
            (
                prop::collection::vec(".{0,12}", 0..4),
                prop::option::of("[A-Za-z]{1,10}"),
                0u32..3,
                0u32..3,
            )
                .prop_map(|(contents, team, model_calls, tool_calls)| StateUpdate {
                    messages: contents.into_iter().map(Message::ai).collect(),
                    preferred_team: team,
                    model_calls,
                    tool_calls,
                })
        }

        proptest! {
            // History never shrinks or reorders; counters never decrease.
            #[test]
            fn apply_is_append_only(updates in prop::collection::vec(arb_update(), 0..8)) {
                let mut state = AgentState::new();
                let mut prior_ids: Vec<Option<String>> = Vec::new();
                let mut prior_model_calls = 0u32;
                let mut prior_tool_calls = 0u32;

                for update in updates {
                    state.apply(update);

                    prop_assert!(state.messages.len() >= prior_ids.len());
                    for (i, id) in prior_ids.iter().enumerate() {
                        prop_assert_eq!(&state.messages[i].id, id);
                    }
                    prop_assert!(state.model_calls >= prior_model_calls);
                    prop_assert!(state.tool_calls >= prior_tool_calls);

                    prior_ids = state.messages.iter().map(|m| m.id.clone()).collect();
                    prior_model_calls = state.model_calls;
                    prior_tool_calls = state.tool_calls;
                }
            }
        }
    }
}
