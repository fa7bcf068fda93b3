//! Graph nodes
//!
//! A [`Node`] consumes the session state and produces a [`NodeOutcome`]:
//! either a state update to advance the run, or an interrupt to suspend it.
//! The outcome is an explicit tagged value - suspension is ordinary control
//! flow, not an error path.
//!
//! The three pieces of the agent machine live here:
//! [`ModelNode`] (calls the model, suspends when a required session field is
//! missing), [`ToolNode`] (dispatches every pending tool call), and the pure
//! [`planner`] routing function.

pub mod model;
pub mod planner;
pub mod tool_node;

pub use model::ModelNode;
pub use planner::{route, Route};
pub use tool_node::ToolNode;

use crate::error::Result;
use crate::interrupt::Interrupt;
use crate::state::{AgentState, StateUpdate};
use async_trait::async_trait;
use serde_json::Value;

/// What a node execution produced.
#[derive(Debug)]
pub enum NodeOutcome {
    /// Advance the run by applying this update
    Advance(StateUpdate),

    /// Suspend the run and surface this interrupt to the caller
    Suspend(Interrupt),
}

/// A unit of execution in the graph.
///
/// `resume` is `Some` only when the runtime re-enters a paused node with the
/// externally supplied value for its interrupt; the node must consume it
/// deterministically.
#[async_trait]
pub trait Node: Send + Sync {
    /// Stable node name, used for checkpoints and logging
    fn name(&self) -> &str;

    /// Execute one step against the current state.
    async fn run(&self, state: &AgentState, resume: Option<&Value>) -> Result<NodeOutcome>;
}
