use async_trait::async_trait;
use axum::{
    extract::{State, WebSocketUpgrade},
    response::Response,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::chat::{ChatRouter, ClientFrame, ServerMessage};
use crate::shared::AppState;

use super::connection_manager::ConnectionManager;
use super::socket::{Connection, MessageHandler, SocketWrapper};

/// Decodes client frames, runs them through the chat router and answers
/// each one with an acknowledgement on the same connection
pub struct WebsocketReceiveHandler {
    router: Arc<ChatRouter>,
    connection_manager: Arc<dyn ConnectionManager>,
}

impl WebsocketReceiveHandler {
    pub fn new(router: Arc<ChatRouter>, connection_manager: Arc<dyn ConnectionManager>) -> Self {
        Self {
            router,
            connection_manager,
        }
    }

    async fn send_ack(&self, connection_id: &str, ack: ServerMessage) {
        match serde_json::to_string(&ack) {
            Ok(json) => {
                self.connection_manager
                    .send_to_connection(connection_id, &json)
                    .await
            }
            Err(e) => warn!(
                connection_id = %connection_id,
                error = %e,
                "Failed to serialize acknowledgement"
            ),
        }
    }
}

#[async_trait]
impl MessageHandler for WebsocketReceiveHandler {
    async fn handle_message(&self, connection_id: &str, message: String) {
        debug!(
            connection_id = %connection_id,
            message = %message,
            "Received message"
        );

        let frame = match serde_json::from_str::<ClientFrame>(&message) {
            Ok(frame) => frame,
            Err(e) => {
                warn!(
                    connection_id = %connection_id,
                    error = %e,
                    "Failed to parse WebSocket message"
                );
                // Still answer the request if its id is readable
                let id = serde_json::from_str::<serde_json::Value>(&message)
                    .ok()
                    .and_then(|v| v.get("id").and_then(|id| id.as_u64()));
                self.send_ack(connection_id, ServerMessage::invalid_frame(id))
                    .await;
                return;
            }
        };

        let result = self.router.handle_event(connection_id, frame.event).await;
        self.send_ack(connection_id, ServerMessage::ack(frame.id, &result))
            .await;
    }
}

/// WebSocket endpoint
/// GET /ws
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(app_state): State<AppState>,
) -> Response {
    ws.on_upgrade(move |socket| handle_websocket_connection(socket, app_state))
}

async fn handle_websocket_connection(socket: axum::extract::ws::WebSocket, app_state: AppState) {
    let connection_id = Uuid::new_v4().to_string();
    info!(connection_id = %connection_id, "New WebSocket connection");

    serve_connection(Box::new(socket), connection_id, app_state).await;
}

/// Runs one connection from registration to teardown
///
/// The connection is dropped from the manager before the room is told, so
/// the departed socket never receives its own departure.
async fn serve_connection(
    socket: Box<dyn SocketWrapper>,
    connection_id: String,
    app_state: AppState,
) {
    let (outbound_sender, outbound_receiver) = mpsc::unbounded_channel::<String>();
    app_state
        .connection_manager
        .add_connection(connection_id.clone(), outbound_sender)
        .await;

    let message_handler = Arc::new(WebsocketReceiveHandler::new(
        app_state.chat_router.clone(),
        app_state.connection_manager.clone(),
    ));

    let connection = Connection::new(
        connection_id.clone(),
        socket,
        outbound_receiver,
        message_handler,
    );

    match connection.run().await {
        Ok(()) => {
            info!(connection_id = %connection_id, "WebSocket connection closed cleanly");
        }
        Err(e) => {
            warn!(
                connection_id = %connection_id,
                error = ?e,
                "WebSocket connection error"
            );
        }
    }

    app_state
        .connection_manager
        .remove_connection(&connection_id)
        .await;
    app_state.chat_router.disconnect(&connection_id).await;
}
