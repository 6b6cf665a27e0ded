use serde::{Deserialize, Serialize};

use super::errors::RegistryError;

/// Binding of one active connection to a (username, room) pair
///
/// Sessions are never mutated in place. Changing name or room means
/// removing the session and registering a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub connection_id: String, // Opaque id handed out by the transport
    pub username: String,      // Normalized display name
    pub room: String,          // Normalized room name
}

/// Roster entry, the only part of a session other clients get to see
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
}

impl Session {
    /// Normalizes and validates the raw join input
    pub fn new(connection_id: &str, username: &str, room: &str) -> Result<Self, RegistryError> {
        let username = normalize_username(username);
        let room = normalize_room(room);

        if username.is_empty() || room.is_empty() {
            return Err(RegistryError::missing_fields());
        }

        Ok(Self {
            connection_id: connection_id.to_string(),
            username,
            room,
        })
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            username: self.username.clone(),
        }
    }

    /// Whether this session would collide with `other` in the same room
    pub fn conflicts_with(&self, other: &Session) -> bool {
        self.connection_id != other.connection_id
            && self.room == other.room
            && self.username == other.username
    }
}

/// Trims, collapses inner whitespace runs and lowercases a display name
pub fn normalize_username(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Trims and lowercases a room name
pub fn normalize_room(raw: &str) -> String {
    raw.trim().to_lowercase()
}
