//! Ordered log of completed sessions.
//!
//! The whole log is one JSON array stored under [`SESSIONS_KEY`], newest
//! first. Insertion order is authoritative; timestamps are informational.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::KeyValueStore;
use crate::error::StoreError;

/// Store key holding the serialized session list.
pub const SESSIONS_KEY: &str = "zen_logger_sessions";

/// One completed (or saved-early) timed session.
///
/// Field names on the wire match the format existing stores and backups use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "durationInSeconds", alias = "durationSeconds")]
    pub duration_secs: u64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Typed access to the session log.
///
/// `add`, `delete` and `clear` are read-modify-write over a single key and
/// are serialized against each other.
pub struct SessionRepository<S: ?Sized> {
    store: Arc<S>,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore + ?Sized> SessionRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// All sessions, most recently added first.
    ///
    /// # Errors
    /// `CorruptData` if the stored list does not decode; `Unavailable` if the
    /// store cannot be read.
    pub async fn list(&self) -> Result<Vec<Session>, StoreError> {
        match self.store.get(SESSIONS_KEY).await? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| StoreError::corrupt(SESSIONS_KEY, e))
            }
            None => Ok(Vec::new()),
        }
    }

    /// Like [`list`](Self::list), but a corrupt list reads as empty.
    pub async fn list_or_empty(&self) -> Result<Vec<Session>, StoreError> {
        match self.list().await {
            Err(StoreError::CorruptData { key, message }) => {
                tracing::warn!(%key, %message, "session list is corrupt, showing empty history");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    pub async fn get(&self, id: &str) -> Result<Option<Session>, StoreError> {
        Ok(self.list().await?.into_iter().find(|s| s.id == id))
    }

    /// Record a session of `duration_secs` at the head of the log.
    ///
    /// Returns `None` without touching the store when `duration_secs <= 0`.
    pub async fn add(&self, duration_secs: i64) -> Result<Option<Session>, StoreError> {
        if duration_secs <= 0 {
            tracing::debug!(duration_secs, "ignoring non-positive session duration");
            return Ok(None);
        }

        let _guard = self.write_lock.lock().await;
        let mut sessions = self.list().await?;

        let mut id = Uuid::new_v4().to_string();
        while sessions.iter().any(|s| s.id == id) {
            id = Uuid::new_v4().to_string();
        }

        let session = Session {
            id,
            duration_secs: duration_secs as u64,
            created_at: Utc::now(),
        };
        sessions.insert(0, session.clone());
        self.write(&sessions).await?;

        tracing::info!(id = %session.id, duration_secs, "session recorded");
        Ok(Some(session))
    }

    /// Remove the session with `id`. Returns whether anything was removed.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut sessions = self.list().await?;
        let before = sessions.len();
        sessions.retain(|s| s.id != id);
        if sessions.len() == before {
            return Ok(false);
        }
        self.write(&sessions).await?;
        tracing::info!(%id, "session deleted");
        Ok(true)
    }

    /// Replace the log with an empty list. Irreversible.
    pub async fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.write(&[]).await?;
        tracing::info!("session history cleared");
        Ok(())
    }

    async fn write(&self, sessions: &[Session]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(sessions).map_err(|e| StoreError::corrupt(SESSIONS_KEY, e))?;
        self.store.set(SESSIONS_KEY, &raw).await
    }
}
