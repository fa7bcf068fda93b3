//! # gully-agent
//!
//! The interactive cricket agent: the system prompt and graph assembly over
//! [`gully-graph`](gully_graph), structured output extraction, and a
//! deterministic scripted model so the demo runs without network access.
//!
//! The `gully` binary in this crate drives the full flow: opening exchange,
//! human-in-the-loop interrupt handshake on the console, follow-up turns,
//! and the session counters at exit.

pub mod agent;
pub mod error;
pub mod extract;
pub mod scripted;

pub use agent::{build_agent, build_agent_with, SYSTEM_PROMPT};
pub use error::{AgentError, Result};
pub use extract::{
    extract, parse_structured, MatchInfo, StructuredResponse, EXTRACTOR_SYSTEM_PROMPT,
};
pub use scripted::ScriptedModel;
