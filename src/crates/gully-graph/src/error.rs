//! Error types for graph execution
//!
//! The taxonomy separates the failure classes the runtime treats differently:
//! model-call failures (fatal to the step, never retried here), node-execution
//! failures (retried per policy, then surfaced as [`GraphError::NodeFailed`]),
//! and resume misuse (caller errors, never silently ignored). Individual
//! tool-call failures do not appear here at all - the tool node converts them
//! into error-bearing tool-result messages instead.

use crate::tool::ToolError;
use gully_checkpoint::CheckpointError;
use thiserror::Error;

/// Result type for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur during graph execution
#[derive(Error, Debug)]
pub enum GraphError {
    /// Model invocation failed (transport, auth, quota)
    #[error("Model call failed: {0}")]
    Model(String),

    /// Tool dispatch failed outside the tool node's local recovery
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// A node step failed and exhausted its retry budget
    #[error("Node '{node}' failed after {attempts} attempt(s): {error}")]
    NodeFailed {
        node: String,
        attempts: usize,
        error: String,
    },

    /// Resume was requested but the session has nothing pending
    #[error("No pending interrupt for session: {0}")]
    NoPendingInterrupt(String),

    /// The resume map does not cover the pending interrupt
    #[error("No resume value supplied for interrupt: {0}")]
    UnknownInterrupt(String),

    /// Invoke was requested while the session is suspended
    #[error("Session '{0}' has a pending interrupt; resume it before invoking again")]
    PendingInterrupt(String),

    /// Checkpoint store error
    #[error("Checkpoint error: {0}")]
    Checkpoint(#[from] CheckpointError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}
