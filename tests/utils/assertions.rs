//! Test assertion helpers for decoding recorded deliveries
#![allow(dead_code)] // Test utilities may not all be used in every test

use roomchat::ServerMessage;

use super::setup::TestSetup;

// ============================================================================
// Assertion Helpers
// ============================================================================

impl TestSetup {
    /// Decoded deliveries as (connection_id, message), oldest first
    pub async fn deliveries(&self) -> Vec<(String, ServerMessage)> {
        self.mock_conn_manager
            .deliveries()
            .await
            .into_iter()
            .map(|(id, raw)| (id, decode(&raw)))
            .collect()
    }

    /// Decoded messages received by one connection, acks included
    pub async fn messages_for(&self, connection_id: &str) -> Vec<ServerMessage> {
        self.mock_conn_manager
            .get_messages_for(connection_id)
            .await
            .iter()
            .map(|raw| decode(raw))
            .collect()
    }

    /// Messages received by one connection with acks filtered out
    pub async fn events_for(&self, connection_id: &str) -> Vec<ServerMessage> {
        self.messages_for(connection_id)
            .await
            .into_iter()
            .filter(|m| !matches!(m, ServerMessage::Ack(_)))
            .collect()
    }

    /// The last ack sent to a connection, as its error field
    pub async fn last_ack(&self, connection_id: &str) -> Option<String> {
        let messages = self.messages_for(connection_id).await;
        let ack = messages
            .iter()
            .rev()
            .find(|m| matches!(m, ServerMessage::Ack(_)))
            .unwrap_or_else(|| panic!("{} should have received an ack", connection_id));
        ack_error(ack)
    }

    /// Count deliveries of one event kind across all connections
    pub async fn count_events(&self, event_name: &str) -> usize {
        self.deliveries()
            .await
            .iter()
            .filter(|(_, m)| m.event_name() == event_name)
            .count()
    }
}

fn decode(raw: &str) -> ServerMessage {
    serde_json::from_str(raw).unwrap_or_else(|e| panic!("undecodable frame {}: {}", raw, e))
}

pub fn ack_error(message: &ServerMessage) -> Option<String> {
    match message {
        ServerMessage::Ack(ack) => ack.error.clone(),
        other => panic!("expected ack, got {}", other.event_name()),
    }
}

/// (username, text) of a chat message
pub fn chat_text(message: &ServerMessage) -> (String, String) {
    match message {
        ServerMessage::Message(m) => (m.username.clone(), m.text.clone()),
        other => panic!("expected message, got {}", other.event_name()),
    }
}

/// Sorted roster usernames of a roomData message
pub fn roster_usernames(message: &ServerMessage) -> (String, Vec<String>) {
    match message {
        ServerMessage::RoomData(data) => {
            let mut users: Vec<String> = data.users.iter().map(|u| u.username.clone()).collect();
            users.sort();
            (data.room.clone(), users)
        }
        other => panic!("expected roomData, got {}", other.event_name()),
    }
}
