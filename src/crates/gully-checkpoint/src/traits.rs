//! Extensible checkpoint storage trait for custom backend implementations
//!
//! This module defines the [`CheckpointSaver`] trait - the abstraction the
//! graph runtime persists session snapshots through. The in-memory backend in
//! [`memory`](crate::memory) is the reference implementation; downstream
//! projects can target any storage system (PostgreSQL, SQLite, Redis, ...)
//! by implementing the same four methods.
//!
//! # Contract
//!
//! The store keeps **one** checkpoint per session id - the latest snapshot.
//! `put` overwrites, `get` returns the current snapshot or `None`. Writes to
//! the same session id must be serialized by the implementation; distinct
//! session ids may be serviced concurrently.
//!
//! # Example: custom backend
//!
//! ```rust,ignore
//! use gully_checkpoint::{Checkpoint, CheckpointSaver};
//! use async_trait::async_trait;
//!
//! struct SqliteSaver { pool: sqlx::SqlitePool }
//!
//! #[async_trait]
//! impl CheckpointSaver for SqliteSaver {
//!     async fn put(&self, checkpoint: Checkpoint) -> gully_checkpoint::Result<()> {
//!         let data = serde_json::to_vec(&checkpoint)?;
//!         // INSERT OR REPLACE INTO checkpoints (session_id, data) ...
//!         Ok(())
//!     }
//!
//!     // ... get / delete / list_sessions ...
//! }
//! ```

use crate::checkpoint::Checkpoint;
use crate::error::Result;
use async_trait::async_trait;

/// Storage backend for session checkpoints.
///
/// Implementations must be `Send + Sync`; the runtime shares the saver across
/// sessions behind an `Arc`.
#[async_trait]
pub trait CheckpointSaver: Send + Sync {
    /// Save a checkpoint, overwriting any previous snapshot for its session.
    async fn put(&self, checkpoint: Checkpoint) -> Result<()>;

    /// Retrieve the latest checkpoint for a session, if any.
    async fn get(&self, session_id: &str) -> Result<Option<Checkpoint>>;

    /// Remove the checkpoint for a session. Removing an unknown session is
    /// not an error.
    async fn delete(&self, session_id: &str) -> Result<()>;

    /// List the session ids currently holding a checkpoint.
    async fn list_sessions(&self) -> Result<Vec<String>>;
}
