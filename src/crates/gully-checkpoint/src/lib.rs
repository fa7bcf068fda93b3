//! Checkpoint persistence for gully graph sessions
//!
//! This crate provides the storage abstraction that lets a suspended
//! conversation be resumed later - possibly much later, possibly from a
//! different process attaching by session id. The graph runtime writes a
//! [`Checkpoint`] after every node execution step; a resume reloads the
//! latest snapshot and re-enters at the recorded pause point.
//!
//! - [`CheckpointSaver`] - the backend trait (one latest snapshot per session)
//! - [`InMemorySaver`] - reference in-memory backend
//! - [`SerializerProtocol`] - pluggable serialization (JSON default, bincode)
//!
//! # Example
//!
//! ```rust
//! use gully_checkpoint::{Checkpoint, CheckpointSaver, InMemorySaver};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> gully_checkpoint::Result<()> {
//! let saver = InMemorySaver::new();
//! saver.put(Checkpoint::new("session-42", 0, json!({"messages": []}))).await?;
//!
//! assert!(saver.get("session-42").await?.is_some());
//! # Ok(())
//! # }
//! ```

pub mod checkpoint;
pub mod error;
pub mod memory;
pub mod serializer;
pub mod traits;

pub use checkpoint::Checkpoint;
pub use error::{CheckpointError, Result};
pub use memory::InMemorySaver;
pub use serializer::{BincodeSerializer, JsonSerializer, SerializerProtocol};
pub use traits::CheckpointSaver;
