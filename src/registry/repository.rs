use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::errors::RegistryError;
use super::models::{normalize_room, Session, UserSummary};

/// Trait for session registry operations
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Validates, normalizes and stores a session for the connection
    ///
    /// Re-registering a connection replaces its previous session.
    async fn add_session(
        &self,
        connection_id: &str,
        username: &str,
        room: &str,
    ) -> Result<Session, RegistryError>;

    /// Removes the connection's session, returning it if there was one
    async fn remove_session(&self, connection_id: &str) -> Option<Session>;

    async fn get_session(&self, connection_id: &str) -> Option<Session>;

    /// Roster projection of every session in the room, unordered
    async fn list_sessions_in_room(&self, room: &str) -> Vec<UserSummary>;

    /// Full sessions in the room, used for recipient selection
    async fn sessions_in_room(&self, room: &str) -> Vec<Session>;
}

/// In-memory session registry
///
/// All state lives behind a single lock, so the uniqueness check and the
/// insert in `add_session` happen under one write guard. Data is lost when
/// the process exits.
pub struct InMemorySessionRegistry {
    // connection_id -> session
    sessions: RwLock<HashMap<String, Session>>,
}

impl Default for InMemorySessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the current number of sessions across all rooms
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessionRegistry {
    #[instrument(skip(self))]
    async fn add_session(
        &self,
        connection_id: &str,
        username: &str,
        room: &str,
    ) -> Result<Session, RegistryError> {
        let session = Session::new(connection_id, username, room)?;

        let mut sessions = self.sessions.write().await;
        if sessions
            .values()
            .any(|existing| existing.conflicts_with(&session))
        {
            debug!(
                username = %session.username,
                room = %session.room,
                "Username already taken in room"
            );
            return Err(RegistryError::username_in_use());
        }
        sessions.insert(session.connection_id.clone(), session.clone());

        debug!(
            username = %session.username,
            room = %session.room,
            "Session registered"
        );
        Ok(session)
    }

    #[instrument(skip(self))]
    async fn remove_session(&self, connection_id: &str) -> Option<Session> {
        let removed = self.sessions.write().await.remove(connection_id);

        match &removed {
            Some(s) => debug!(username = %s.username, room = %s.room, "Session removed"),
            None => debug!("No session to remove"),
        }

        removed
    }

    async fn get_session(&self, connection_id: &str) -> Option<Session> {
        self.sessions.read().await.get(connection_id).cloned()
    }

    async fn list_sessions_in_room(&self, room: &str) -> Vec<UserSummary> {
        self.sessions_in_room(room)
            .await
            .iter()
            .map(Session::summary)
            .collect()
    }

    async fn sessions_in_room(&self, room: &str) -> Vec<Session> {
        let room = normalize_room(room);
        self.sessions
            .read()
            .await
            .values()
            .filter(|s| s.room == room)
            .cloned()
            .collect()
    }
}
