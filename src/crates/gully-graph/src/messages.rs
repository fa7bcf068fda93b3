//! Message types for conversational agents
//!
//! A [`Message`] is one turn in a conversation: system instructions, human
//! input, an assistant reply (optionally carrying tool-call requests), or a
//! tool result linked back to the requesting call. Messages are immutable
//! once created; the session history only ever grows by appending.
//!
//! # Examples
//!
//! ```rust
//! use gully_graph::messages::Message;
//!
//! let system = Message::system("You are a helpful assistant.");
//! let question = Message::human("Who is ranked first?");
//! let answer = Message::ai("India holds the top spot.");
//! ```
//!
//! Tool calling links requests and results by call id:
//!
//! ```rust
//! use gully_graph::messages::Message;
//! use gully_graph::tool::ToolCall;
//! use serde_json::json;
//!
//! let request = Message::ai("Let me look that up.")
//!     .with_tool_calls(vec![ToolCall::new("call_1", "get_team_rankings", json!({}))]);
//! let result = Message::tool(r#"[{"team":"India","rank":1}]"#, "call_1");
//!
//! assert!(request.has_tool_calls());
//! assert_eq!(result.tool_call_id.as_deref(), Some("call_1"));
//! ```

use crate::tool::ToolCall;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of the message sender in a conversation.
///
/// Roles serialize to lowercase strings compatible with common chat APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Instructions or context for the model
    System,
    /// End-user input
    Human,
    /// Model output, possibly carrying tool-call requests
    Assistant,
    /// Result of a tool execution
    Tool,
}

/// A single turn in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for this message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Role of the message sender
    pub role: MessageRole,

    /// Textual content
    pub content: String,

    /// Tool-call requests (assistant messages only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,

    /// Id of the tool call this message answers (tool messages only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl Message {
    /// Create a new message with the given role and content
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Some(Uuid::new_v4().to_string()),
            role,
            content: content.into(),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a human message
    pub fn human(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Human, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    /// Create an assistant message (alias for `assistant`)
    pub fn ai(content: impl Into<String>) -> Self {
        Self::assistant(content)
    }

    /// Create a tool-result message answering the given call id
    pub fn tool(content: impl Into<String>, tool_call_id: impl Into<String>) -> Self {
        Self {
            id: Some(Uuid::new_v4().to_string()),
            role: MessageRole::Tool,
            content: content.into(),
            tool_calls: None,
            tool_call_id: Some(tool_call_id.into()),
        }
    }

    /// Set the message ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Attach tool-call requests (for assistant messages)
    pub fn with_tool_calls(mut self, tool_calls: Vec<ToolCall>) -> Self {
        self.tool_calls = Some(tool_calls);
        self
    }

    /// Whether this message carries at least one tool-call request
    pub fn has_tool_calls(&self) -> bool {
        self.tool_calls
            .as_ref()
            .map(|calls| !calls.is_empty())
            .unwrap_or(false)
    }

    /// The tool-call requests on this message (empty if none)
    pub fn tool_calls(&self) -> &[ToolCall] {
        self.tool_calls.as_deref().unwrap_or(&[])
    }

    /// Whether this is an assistant message
    pub fn is_assistant(&self) -> bool {
        self.role == MessageRole::Assistant
    }

    /// Whether this is a tool-result message
    pub fn is_tool(&self) -> bool {
        self.role == MessageRole::Tool
    }

    /// Ensure this message has an ID (generate one if missing)
    pub fn ensure_id(&mut self) {
        if self.id.is_none() {
            self.id = Some(Uuid::new_v4().to_string());
        }
    }
}
