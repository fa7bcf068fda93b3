//! Model collaborator traits
//!
//! The graph is an orchestration layer, not an LLM client: the core exposes a
//! [`ChatModel`] trait (messages in, an assistant message out, possibly
//! carrying tool-call requests) and callers implement it for their provider.
//! Implementations must fail explicitly - a transport or auth problem is an
//! `Err`, never a silently empty response.
//!
//! # Example implementation
//!
//! ```rust,ignore
//! use gully_graph::llm::{ChatModel, ChatRequest, ChatResponse};
//! use gully_graph::error::{GraphError, Result};
//! use async_trait::async_trait;
//!
//! struct MyProvider { endpoint: String }
//!
//! #[async_trait]
//! impl ChatModel for MyProvider {
//!     async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
//!         // 1. Convert messages to the provider's wire format
//!         // 2. Make the call
//!         // 3. Map transport/auth failures to GraphError::Model
//!         // 4. Convert the reply back to a Message
//!         todo!()
//!     }
//! }
//! ```

use crate::error::Result;
use crate::messages::Message;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Definition of a tool the model may call: name, description, and a JSON
/// Schema for its arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique tool name
    pub name: String,

    /// What the tool does; the model uses this to decide when to call it
    pub description: String,

    /// JSON Schema describing the arguments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}

impl ToolDefinition {
    /// Create a new tool definition with name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: None,
        }
    }

    /// Add a JSON Schema for the tool's parameters.
    pub fn with_parameters(mut self, parameters: Value) -> Self {
        self.parameters = Some(parameters);
        self
    }
}

/// A chat request: ordered message history plus the tools bound for this call.
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    /// Ordered conversation, system message first
    pub messages: Vec<Message>,

    /// Tools the model may call
    pub tools: Vec<ToolDefinition>,

    /// Sampling temperature
    pub temperature: Option<f32>,

    /// Response token budget
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a request from a message history.
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    /// Bind tools to this request.
    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the response token budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Token accounting reported by a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageMetadata {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

/// A complete model reply.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// The assistant message, optionally carrying tool-call requests
    pub message: Message,

    /// Token usage, if the provider reports it
    pub usage: Option<UsageMetadata>,
}

impl ChatResponse {
    /// Create a response wrapping an assistant message.
    pub fn new(message: Message) -> Self {
        Self {
            message,
            usage: None,
        }
    }

    /// Attach usage metadata.
    pub fn with_usage(mut self, usage: UsageMetadata) -> Self {
        self.usage = Some(usage);
        self
    }
}

/// Chat-capable language model.
///
/// Implementations must be `Send + Sync`; the graph shares the model across
/// nodes behind an `Arc<dyn ChatModel>`.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Generate a complete reply from the request's messages and bound tools.
    ///
    /// Transport, auth, and quota failures must surface as
    /// [`GraphError::Model`](crate::error::GraphError::Model).
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse>;

    /// Check whether the provider is reachable. Defaults to available.
    async fn is_available(&self) -> Result<bool> {
        Ok(true)
    }
}
