//! Error types for the agent crate

use gully_graph::GraphError;
use thiserror::Error;

/// Result type for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Errors that can occur in the agent layer
#[derive(Error, Debug)]
pub enum AgentError {
    /// Graph execution error
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Structured extraction failed
    #[error("Structured extraction failed: {0}")]
    Extraction(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
