//! Thread-safe in-memory checkpoint storage
//!
//! [`InMemorySaver`] is the reference [`CheckpointSaver`] implementation,
//! suitable for development, testing, and single-process deployments. State
//! does not survive the process; implement the trait over a database for
//! durable storage.
//!
//! Checkpoints are stored serialized through the configured
//! [`SerializerProtocol`] (JSON by default), so a saver round-trips exactly
//! what a durable backend would. The `RwLock` serializes writes; readers of
//! other sessions proceed concurrently.

use crate::checkpoint::Checkpoint;
use crate::error::Result;
use crate::serializer::{JsonSerializer, SerializerProtocol};
use crate::traits::CheckpointSaver;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory checkpoint saver.
///
/// # Example
///
/// ```rust
/// use gully_checkpoint::{Checkpoint, CheckpointSaver, InMemorySaver};
/// use serde_json::json;
///
/// # #[tokio::main]
/// # async fn main() -> gully_checkpoint::Result<()> {
/// let saver = InMemorySaver::new();
///
/// saver.put(Checkpoint::new("session-1", 0, json!({}))).await?;
/// let loaded = saver.get("session-1").await?;
/// assert_eq!(loaded.unwrap().step, 0);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct InMemorySaver<S: SerializerProtocol = JsonSerializer> {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    serializer: Arc<S>,
}

impl InMemorySaver<JsonSerializer> {
    /// Create a saver backed by the default JSON serializer.
    pub fn new() -> Self {
        Self::with_serializer(JsonSerializer::new())
    }
}

impl Default for InMemorySaver<JsonSerializer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SerializerProtocol> InMemorySaver<S> {
    /// Create a saver with a custom serialization protocol.
    pub fn with_serializer(serializer: S) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            serializer: Arc::new(serializer),
        }
    }

    /// Number of sessions currently holding a checkpoint.
    pub async fn session_count(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Clear all checkpoints (useful for testing).
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

#[async_trait]
impl<S: SerializerProtocol> CheckpointSaver for InMemorySaver<S> {
    async fn put(&self, checkpoint: Checkpoint) -> Result<()> {
        let data = self.serializer.dumps(&checkpoint)?;
        self.entries
            .write()
            .await
            .insert(checkpoint.session_id.clone(), data);
        Ok(())
    }

    async fn get(&self, session_id: &str) -> Result<Option<Checkpoint>> {
        let entries = self.entries.read().await;
        match entries.get(session_id) {
            Some(data) => Ok(Some(self.serializer.loads(data)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, session_id: &str) -> Result<()> {
        self.entries.write().await.remove(session_id);
        Ok(())
    }

    async fn list_sessions(&self) -> Result<Vec<String>> {
        Ok(self.entries.read().await.keys().cloned().collect())
    }
}
