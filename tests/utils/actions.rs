use serde_json::json;

use roomchat::{ClientEvent, ClientFrame, MessageHandler};

use super::setup::TestSetup;

// ============================================================================
// Action Helpers
// ============================================================================

impl TestSetup {
    /// Send a raw text frame as if it arrived on the socket
    pub async fn send_raw(&self, connection_id: &str, frame: &str) {
        self.input_handler
            .handle_message(connection_id, frame.to_string())
            .await;
    }

    /// Send a client event with a request id
    pub async fn send_event(&self, connection_id: &str, id: u64, event: ClientEvent) {
        let frame = ClientFrame {
            id: Some(id),
            event,
        };
        self.send_raw(connection_id, &serde_json::to_string(&frame).unwrap())
            .await;
    }

    /// Clear all recorded messages
    pub async fn clear_messages(&self) {
        self.mock_conn_manager.clear_messages().await;
    }

    // ============================================================================
    // Convenience Action Methods
    // ============================================================================

    pub async fn join(&self, connection_id: &str, username: &str, room: &str) {
        self.send_event(
            connection_id,
            1,
            ClientEvent::Join {
                username: username.to_string(),
                room: room.to_string(),
            },
        )
        .await;
    }

    pub async fn send_chat(&self, connection_id: &str, text: &str) {
        self.send_event(
            connection_id,
            2,
            ClientEvent::SendMessage {
                text: text.to_string(),
            },
        )
        .await;
    }

    pub async fn send_location(&self, connection_id: &str, latitude: f64, longitude: f64) {
        self.send_raw(
            connection_id,
            &json!({
                "id": 3,
                "event": {
                    "type": "sendLocation",
                    "payload": { "latitude": latitude, "longitude": longitude }
                }
            })
            .to_string(),
        )
        .await;
    }

    /// Socket went away
    pub async fn disconnect(&self, connection_id: &str) {
        self.router.disconnect(connection_id).await;
    }
}
