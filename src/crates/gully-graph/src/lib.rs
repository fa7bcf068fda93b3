//! # gully-graph
//!
//! Graph runtime for conversational agents: a small state machine that routes
//! a conversation through a model-call node, a tool-execution node, and a
//! pure routing decision, with cooperative suspension for human-in-the-loop
//! input and per-session checkpointing.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  AgentGraph                                              │
//! │                                                          │
//! │   invoke ──► ModelNode ──► planner ──► Settled           │
//! │                 ▲   │         │                          │
//! │                 │   │         ▼ (pending tool calls)     │
//! │                 │   │      ToolNode ──► (loop back)      │
//! │                 │   │                                    │
//! │                 │   └──► Suspend(Interrupt) ──► Paused   │
//! │                 │                                 │      │
//! │   resume ───────┴─────────────────────────────────┘      │
//! │                                                          │
//! │   Checkpoint written after every node step               │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Core pieces
//!
//! - [`AgentState`] / [`StateUpdate`] - typed session state; nodes return
//!   updates, the runtime applies them, history stays append-only
//! - [`Message`] - conversation turns, with tool-call linkage by call id
//! - [`ToolRegistry`] / [`Tool`] - case-insensitive tool dispatch; tools may
//!   return a state-update directive instead of a plain value
//! - [`ChatModel`] - the opaque model collaborator (messages in, an
//!   assistant message out)
//! - [`Interrupt`] / [`ResumeMap`] - the suspend/resume handshake
//! - [`AgentGraph`] / [`RunResult`] - the runtime: `Settled(state)` or
//!   `Paused { state, interrupts }`
//! - [`RetryPolicy`] - bounded retry for node execution steps
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use gully_graph::{
//!     AgentGraph, AgentState, Message, ModelNode, RunResult, ToolNode, ToolRegistry,
//! };
//! use gully_checkpoint::InMemorySaver;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(build_registry());
//! let model_node = Arc::new(
//!     ModelNode::new(model, SYSTEM_PROMPT).with_tools(registry.definitions()),
//! );
//! let tool_node = Arc::new(ToolNode::new(registry));
//! let graph = AgentGraph::new(model_node, tool_node, Arc::new(InMemorySaver::new()));
//!
//! let state = AgentState::with_messages(vec![Message::human("Can you introduce yourself?")]);
//! let result = graph.invoke(state, "session-1").await?;
//! ```

pub mod error;
pub mod interrupt;
pub mod llm;
pub mod messages;
pub mod nodes;
pub mod retry;
pub mod runtime;
pub mod state;
pub mod tool;

pub use error::{GraphError, Result};
pub use interrupt::{Interrupt, ResumeMap};
pub use llm::{ChatModel, ChatRequest, ChatResponse, ToolDefinition, UsageMetadata};
pub use messages::{Message, MessageRole};
pub use nodes::{route, ModelNode, Node, NodeOutcome, Route, ToolNode};
pub use retry::{RetryPolicy, RetryState};
pub use runtime::{AgentGraph, NodeKind, ResumePoint, RunResult};
pub use state::{AgentState, StateUpdate};
pub use tool::{Tool, ToolCall, ToolError, ToolOutcome, ToolRegistry, ToolResult, ToolRuntime};
