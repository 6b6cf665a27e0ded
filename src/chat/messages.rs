use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::ChatError;
use crate::registry::UserSummary;

/// Sender label for server-authored messages
pub const SYSTEM_SENDER: &str = "admin";
pub const WELCOME_TEXT: &str = "Welcome!";
pub const INVALID_FRAME: &str = "Invalid message format";

/// Client -> Server events
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum ClientEvent {
    Join { username: String, room: String },
    SendMessage { text: String },
    SendLocation { latitude: f64, longitude: f64 },
}

/// Envelope for client events
///
/// `id` is echoed back in the acknowledgement so the client can match it
/// to the request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientFrame {
    #[serde(default)]
    pub id: Option<u64>,
    pub event: ClientEvent,
}

/// Server -> Client payloads
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub username: String,
    pub text: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationMessage {
    pub username: String,
    pub url: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomData {
    pub room: String,
    pub users: Vec<UserSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ack {
    pub id: Option<u64>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum ServerMessage {
    Message(ChatMessage),
    LocationMessage(LocationMessage),
    RoomData(RoomData),
    Ack(Ack),
}

/// Helper functions for creating messages
impl ServerMessage {
    /// Create a MESSAGE authored by `username`
    pub fn chat(username: String, text: String) -> Self {
        Self::Message(ChatMessage {
            username,
            text,
            created_at: Utc::now(),
        })
    }

    /// Create a MESSAGE authored by the server
    pub fn system(text: String) -> Self {
        Self::chat(SYSTEM_SENDER.to_string(), text)
    }

    pub fn welcome() -> Self {
        Self::system(WELCOME_TEXT.to_string())
    }

    pub fn user_joined(username: &str) -> Self {
        Self::system(format!("{} has joined!", username))
    }

    pub fn user_left(username: &str) -> Self {
        Self::system(format!("{} has left", username))
    }

    /// Create a LOCATION_MESSAGE with a map link to the coordinates
    pub fn location(username: String, latitude: f64, longitude: f64) -> Self {
        Self::LocationMessage(LocationMessage {
            username,
            url: map_url(latitude, longitude),
            created_at: Utc::now(),
        })
    }

    /// Create a ROOM_DATA roster update
    pub fn room_data(room: String, users: Vec<UserSummary>) -> Self {
        Self::RoomData(RoomData { room, users })
    }

    /// Create an ACK carrying the handler outcome
    pub fn ack(id: Option<u64>, result: &Result<(), ChatError>) -> Self {
        Self::Ack(Ack {
            id,
            error: result.as_ref().err().map(|e| e.to_string()),
        })
    }

    /// Create an ACK for a frame that could not be decoded
    pub fn invalid_frame(id: Option<u64>) -> Self {
        Self::Ack(Ack {
            id,
            error: Some(INVALID_FRAME.to_string()),
        })
    }

    pub fn event_name(&self) -> &'static str {
        match self {
            ServerMessage::Message(_) => "message",
            ServerMessage::LocationMessage(_) => "locationMessage",
            ServerMessage::RoomData(_) => "roomData",
            ServerMessage::Ack(_) => "ack",
        }
    }
}

pub fn map_url(latitude: f64, longitude: f64) -> String {
    format!("https://google.com/maps?q={},{}", latitude, longitude)
}
