//! Session store with idle expiry.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use formpilot_protocols::error::ChatError;
use formpilot_protocols::provider::ChatMessage;

use crate::status::FieldStatus;

/// One intake conversation: the message history and the last parsed status.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub messages: Vec<ChatMessage>,
    pub status: Option<FieldStatus>,
    last_active: Instant,
}

/// In-memory session store keyed by id.
///
/// Idle sessions past the TTL are swept lazily whenever the store is
/// touched; there is no background reaper.
pub struct SessionStore {
    sessions: DashMap<String, Session>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Create a session seeded with a system message; returns its id.
    pub fn create(&self, system_message: ChatMessage) -> String {
        self.sweep();

        let id = Uuid::new_v4().to_string();
        let session = Session {
            id: id.clone(),
            messages: vec![system_message],
            status: None,
            last_active: Instant::now(),
        };
        self.sessions.insert(id.clone(), session);
        debug!(session_id = %id, "created chat session");
        id
    }

    /// Snapshot a session's message history, refreshing its idle timer.
    pub fn messages(&self, id: &str) -> Result<Vec<ChatMessage>, ChatError> {
        self.sweep();
        let mut entry = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| ChatError::SessionNotFound(id.to_string()))?;
        entry.last_active = Instant::now();
        Ok(entry.messages.clone())
    }

    /// Append a message to a session.
    pub fn append(&self, id: &str, message: ChatMessage) -> Result<(), ChatError> {
        let mut entry = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| ChatError::SessionNotFound(id.to_string()))?;
        entry.messages.push(message);
        entry.last_active = Instant::now();
        Ok(())
    }

    /// Record the last parsed field status.
    pub fn set_status(&self, id: &str, status: FieldStatus) -> Result<(), ChatError> {
        let mut entry = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| ChatError::SessionNotFound(id.to_string()))?;
        entry.status = Some(status);
        Ok(())
    }

    pub fn status(&self, id: &str) -> Result<Option<FieldStatus>, ChatError> {
        self.sweep();
        self.sessions
            .get(id)
            .map(|s| s.status.clone())
            .ok_or_else(|| ChatError::SessionNotFound(id.to_string()))
    }

    pub fn remove(&self, id: &str) -> Result<(), ChatError> {
        self.sessions
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ChatError::SessionNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn sweep(&self) {
        let ttl = self.ttl;
        self.sessions
            .retain(|_, session| session.last_active.elapsed() < ttl);
    }
}
