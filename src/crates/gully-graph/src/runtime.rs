//! Graph runtime: the fixed agent state machine
//!
//! The runtime wires the three nodes into the conversational loop and owns
//! the session checkpoint:
//!
//! ```text
//!  start ──► Model ──► Planner ──► End
//!              ▲          │
//!              │          ▼ (pending tool calls)
//!              └───────  Tool
//! ```
//!
//! One path per step, nodes strictly sequential, no cycle other than
//! Model <-> Tool. After every node execution the full session state is
//! checkpointed under the caller-supplied session id; a suspended run records
//! a [`ResumePoint`] so [`AgentGraph::resume`] re-enters at the paused node
//! rather than the graph entry.
//!
//! # Running a session
//!
//! ```rust,ignore
//! use gully_graph::{AgentGraph, AgentState, Message, RunResult};
//!
//! let graph = AgentGraph::new(model_node, tool_node, checkpointer);
//! let state = AgentState::with_messages(vec![Message::human("Hello!")]);
//!
//! match graph.invoke(state, "session-1").await? {
//!     RunResult::Settled(state) => println!("{}", state.last_message().unwrap().content),
//!     RunResult::Paused { interrupts, .. } => {
//!         // Surface interrupts[0].prompt() to the operator, then:
//!         // graph.resume("session-1", resume_map).await?
//!     }
//! }
//! ```

use crate::error::{GraphError, Result};
use crate::interrupt::{Interrupt, ResumeMap};
use crate::messages::Message;
use crate::nodes::{route, Node, NodeOutcome, Route};
use crate::retry::RetryPolicy;
use crate::state::{AgentState, StateUpdate};
use gully_checkpoint::{Checkpoint, CheckpointSaver};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The node a resumed run re-enters at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Model,
    Tool,
}

/// Paused-point marker persisted in the checkpoint while a run is suspended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumePoint {
    /// Node to re-enter
    pub node: NodeKind,

    /// The outstanding interrupt
    pub interrupt: Interrupt,
}

/// Outcome of an invoke or resume call.
#[derive(Debug, Clone)]
pub enum RunResult {
    /// The run reached the terminal node
    Settled(AgentState),

    /// The run is suspended awaiting resume values for these interrupts
    Paused {
        state: AgentState,
        interrupts: Vec<Interrupt>,
    },
}

impl RunResult {
    /// Whether the run is suspended.
    pub fn is_paused(&self) -> bool {
        matches!(self, RunResult::Paused { .. })
    }

    /// The session state carried by either outcome.
    pub fn state(&self) -> &AgentState {
        match self {
            RunResult::Settled(state) => state,
            RunResult::Paused { state, .. } => state,
        }
    }

    /// Consume the result, returning the session state.
    pub fn into_state(self) -> AgentState {
        match self {
            RunResult::Settled(state) => state,
            RunResult::Paused { state, .. } => state,
        }
    }
}

/// The graph runtime: model node, tool node, planner, checkpoint store.
pub struct AgentGraph {
    model_node: Arc<dyn Node>,
    tool_node: Arc<dyn Node>,
    tool_retry: RetryPolicy,
    checkpointer: Arc<dyn CheckpointSaver>,
    iteration_limit: Option<usize>,
}

impl AgentGraph {
    /// Wire the fixed machine: entry at the model node, tool node on the
    /// loop-back edge, checkpoints written through the given saver.
    pub fn new(
        model_node: Arc<dyn Node>,
        tool_node: Arc<dyn Node>,
        checkpointer: Arc<dyn CheckpointSaver>,
    ) -> Self {
        Self {
            model_node,
            tool_node,
            tool_retry: RetryPolicy::default(),
            checkpointer,
            iteration_limit: None,
        }
    }

    /// Set the retry policy wrapping tool-node execution steps.
    pub fn with_tool_retry(mut self, policy: RetryPolicy) -> Self {
        self.tool_retry = policy;
        self
    }

    /// Cap the number of Model -> Tool rounds in a single run. When the cap
    /// is exceeded the run is settled with a truncation notice appended.
    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    /// The checkpoint store backing this runtime.
    pub fn checkpointer(&self) -> &Arc<dyn CheckpointSaver> {
        &self.checkpointer
    }

    /// Run the graph from its entry point with the given session state.
    ///
    /// Returns a settled state, or a paused result carrying the pending
    /// interrupts. A session that is already suspended must be resumed, not
    /// re-invoked.
    pub async fn invoke(&self, state: AgentState, session_id: &str) -> Result<RunResult> {
        let step = match self.checkpointer.get(session_id).await? {
            Some(checkpoint) if checkpoint.is_paused() => {
                return Err(GraphError::PendingInterrupt(session_id.to_string()));
            }
            Some(checkpoint) => checkpoint.step,
            None => 0,
        };

        info!(session = session_id, "invoking graph");
        self.run_loop(state, session_id, NodeKind::Model, None, step)
            .await
    }

    /// Resume a suspended run with values keyed by interrupt id.
    ///
    /// Reloads the session's checkpoint and re-enters at the paused node with
    /// the supplied value injected. Resuming a session with nothing pending,
    /// or supplying a map that does not cover the pending interrupt, is a
    /// caller error.
    pub async fn resume(&self, session_id: &str, resume: ResumeMap) -> Result<RunResult> {
        let checkpoint = self
            .checkpointer
            .get(session_id)
            .await?
            .ok_or_else(|| GraphError::NoPendingInterrupt(session_id.to_string()))?;

        let point_value = checkpoint
            .resume_point
            .clone()
            .ok_or_else(|| GraphError::NoPendingInterrupt(session_id.to_string()))?;
        let point: ResumePoint = serde_json::from_value(point_value)?;

        let value = resume
            .get(&point.interrupt.id)
            .cloned()
            .ok_or_else(|| GraphError::UnknownInterrupt(point.interrupt.id.clone()))?;

        let state: AgentState = serde_json::from_value(checkpoint.state)?;

        info!(
            session = session_id,
            interrupt = %point.interrupt.id,
            "resuming suspended run"
        );
        self.run_loop(state, session_id, point.node, Some(value), checkpoint.step)
            .await
    }

    async fn run_loop(
        &self,
        mut state: AgentState,
        session_id: &str,
        entry: NodeKind,
        mut resume: Option<Value>,
        mut step: usize,
    ) -> Result<RunResult> {
        let mut next = entry;
        let mut tool_rounds = 0usize;

        loop {
            let (node, policy) = match next {
                NodeKind::Model => (&self.model_node, None),
                NodeKind::Tool => (&self.tool_node, Some(&self.tool_retry)),
            };

            let resume_value = resume.take();
            let outcome = self
                .execute_node(node, &state, resume_value.as_ref(), policy)
                .await?;
            step += 1;

            match outcome {
                NodeOutcome::Suspend(interrupt) => {
                    info!(
                        session = session_id,
                        node = node.name(),
                        interrupt = %interrupt.id,
                        "run paused"
                    );
                    let point = ResumePoint {
                        node: next,
                        interrupt: interrupt.clone(),
                    };
                    self.save_checkpoint(session_id, step, &state, Some(&point))
                        .await?;
                    return Ok(RunResult::Paused {
                        state,
                        interrupts: vec![interrupt],
                    });
                }
                NodeOutcome::Advance(update) => {
                    state.apply(update);
                    self.save_checkpoint(session_id, step, &state, None).await?;
                }
            }

            next = match next {
                NodeKind::Model => match route(&state) {
                    Route::Tool => NodeKind::Tool,
                    Route::End => {
                        info!(session = session_id, step, "run settled");
                        return Ok(RunResult::Settled(state));
                    }
                },
                NodeKind::Tool => NodeKind::Model,
            };

            if next == NodeKind::Tool {
                tool_rounds += 1;
                if let Some(limit) = self.iteration_limit {
                    if tool_rounds > limit {
                        warn!(
                            session = session_id,
                            limit, "tool loop exceeded iteration limit; forcing termination"
                        );
                        state.apply(StateUpdate::new().with_message(Message::assistant(
                            "This conversation was truncated because the tool loop exceeded \
                             the configured iteration limit.",
                        )));
                        step += 1;
                        self.save_checkpoint(session_id, step, &state, None).await?;
                        return Ok(RunResult::Settled(state));
                    }
                }
            }
        }
    }

    /// Execute one node step, applying the retry policy when one is attached.
    ///
    /// Retries cover node-execution failures only; a tool call failing inside
    /// the tool node is recovered there and never reaches this path.
    async fn execute_node(
        &self,
        node: &Arc<dyn Node>,
        state: &AgentState,
        resume: Option<&Value>,
        policy: Option<&RetryPolicy>,
    ) -> Result<NodeOutcome> {
        let Some(policy) = policy else {
            return node.run(state, resume).await;
        };

        let mut attempt = 0usize;
        loop {
            match node.run(state, resume).await {
                Ok(outcome) => return Ok(outcome),
                Err(error) => {
                    attempt += 1;
                    if attempt >= policy.max_attempts {
                        return Err(GraphError::NodeFailed {
                            node: node.name().to_string(),
                            attempts: attempt,
                            error: error.to_string(),
                        });
                    }
                    let delay = policy.calculate_delay(attempt - 1);
                    warn!(
                        node = node.name(),
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %error,
                        "node execution failed; retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    async fn save_checkpoint(
        &self,
        session_id: &str,
        step: usize,
        state: &AgentState,
        point: Option<&ResumePoint>,
    ) -> Result<()> {
        let mut checkpoint = Checkpoint::new(session_id, step, serde_json::to_value(state)?);
        if let Some(point) = point {
            checkpoint = checkpoint.with_resume_point(serde_json::to_value(point)?);
        }
        debug!(session = session_id, step, "checkpoint written");
        self.checkpointer.put(checkpoint).await?;
        Ok(())
    }
}
