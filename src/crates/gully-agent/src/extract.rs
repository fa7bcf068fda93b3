//! Structured output extraction
//!
//! After the graph settles, free-text agent output can be normalized into a
//! machine-checkable shape by a secondary model call: the extractor is asked
//! to reply with a single JSON object matching [`StructuredResponse`], a
//! union discriminated by its `type` tag (`match_list`, `chat`, or `error`).
//! Models often wrap JSON in markdown fences, so the parser strips those
//! before deserializing. A reply that does not parse is an explicit
//! [`AgentError::Extraction`], never a silent empty response.

use crate::error::{AgentError, Result};
use gully_graph::{ChatModel, ChatRequest, Message};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// System instructions for the extraction call.
pub const EXTRACTOR_SYSTEM_PROMPT: &str = "\
You are a helpful assistant that can extract structured information from the agent's \
responses into the required format. Reply with a single JSON object with a \"type\" field \
of \"match_list\", \"chat\", or \"error\", and the fields that type requires. Do not add \
any commentary.";

/// One upcoming cricket match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchInfo {
    /// Name of the cricket series
    pub series_name: String,
    /// Description of the match
    pub match_desc: String,
    /// Format of the match (e.g., Test, ODI, T20)
    pub match_format: String,
    /// Start date of the match in epoch time
    pub start_date: String,
    /// End date of the match in epoch time
    pub end_date: String,
    /// Name of the first team
    pub team1: String,
    /// Name of the second team
    pub team2: String,
    /// Venue of the match
    pub venue: String,
}

/// Unified response format: a tool-derived match listing, a general chat
/// reply, or an error report, discriminated by the `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StructuredResponse {
    /// Response derived from the upcoming-matches tool
    MatchList {
        matches: Vec<MatchInfo>,
        has_matches: bool,
        /// Brief summary providing context to the user
        agent_summary: String,
    },

    /// General agent response that is not a tool response
    Chat { content: String },

    /// Error response describing what went wrong
    Error { error_message: String },
}

/// Normalize free-text agent output via a secondary model call.
pub async fn extract(model: &dyn ChatModel, text: &str) -> Result<StructuredResponse> {
    let request = ChatRequest::new(vec![
        Message::system(EXTRACTOR_SYSTEM_PROMPT),
        Message::human(format!(
            "Extract the structured response from the following agent output:\n\n{}",
            text
        )),
    ]);

    let response = model.chat(request).await?;
    parse_structured(&response.message.content)
}

/// Parse extractor output into a [`StructuredResponse`], tolerating markdown
/// code fences around the JSON.
pub fn parse_structured(text: &str) -> Result<StructuredResponse> {
    let payload = strip_code_fences(text);
    serde_json::from_str(payload.trim())
        .map_err(|e| AgentError::Extraction(format!("reply was not valid structured JSON: {e}")))
}

fn fence_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)```(?:json)?\s*(.*?)\s*```").expect("static fence pattern compiles")
    })
}

fn strip_code_fences(text: &str) -> &str {
    match fence_pattern().captures(text) {
        Some(captures) => captures.get(1).map(|m| m.as_str()).unwrap_or(text),
        None => text,
    }
}
