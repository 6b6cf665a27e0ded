use std::sync::Arc;
use tracing::{debug, info, warn};

use super::errors::ChatError;
use super::messages::{ClientEvent, ServerMessage};
use super::recipients::{select_recipients, Destination};
use crate::filter::ContentFilter;
use crate::registry::{Session, SessionRegistry};
use crate::websockets::ConnectionManager;

/// Turns connection lifecycle and content events into registry changes and
/// outbound deliveries
///
/// The router keeps no state of its own. Every call re-reads the session
/// from the registry by connection id.
pub struct ChatRouter {
    registry: Arc<dyn SessionRegistry>,
    connection_manager: Arc<dyn ConnectionManager>,
    content_filter: Arc<dyn ContentFilter>,
}

impl ChatRouter {
    pub fn new(
        registry: Arc<dyn SessionRegistry>,
        connection_manager: Arc<dyn ConnectionManager>,
        content_filter: Arc<dyn ContentFilter>,
    ) -> Self {
        Self {
            registry,
            connection_manager,
            content_filter,
        }
    }

    /// Dispatches a decoded client event
    pub async fn handle_event(
        &self,
        connection_id: &str,
        event: ClientEvent,
    ) -> Result<(), ChatError> {
        match event {
            ClientEvent::Join { username, room } => {
                self.join(connection_id, &username, &room).await
            }
            ClientEvent::SendMessage { text } => self.send_message(connection_id, &text).await,
            ClientEvent::SendLocation {
                latitude,
                longitude,
            } => {
                self.send_location(connection_id, latitude, longitude)
                    .await
            }
        }
    }

    pub async fn join(
        &self,
        connection_id: &str,
        username: &str,
        room: &str,
    ) -> Result<(), ChatError> {
        // Events on one connection are handled in order, so this is still current at add time
        let previous = self.registry.get_session(connection_id).await;

        let session = match self.registry.add_session(connection_id, username, room).await {
            Ok(session) => session,
            Err(e) => {
                info!(
                    connection_id = %connection_id,
                    error = %e,
                    "Join rejected"
                );
                return Err(e.into());
            }
        };

        info!(
            connection_id = %connection_id,
            username = %session.username,
            room = %session.room,
            "User joined room"
        );

        let moved = |p: &Session| p.room != session.room || p.username != session.username;
        if let Some(previous) = previous.filter(moved) {
            self.announce_departure(&previous).await;
        }

        // The welcome has to reach the joiner before the roster that lists them
        self.deliver(Destination::Sender, &session, &[], &ServerMessage::welcome())
            .await;

        let members = self.registry.sessions_in_room(&session.room).await;
        self.deliver(
            Destination::RoomExceptSender,
            &session,
            &members,
            &ServerMessage::user_joined(&session.username),
        )
        .await;
        self.broadcast_roster(&session, &members).await;

        Ok(())
    }

    pub async fn send_message(&self, connection_id: &str, text: &str) -> Result<(), ChatError> {
        let Some(session) = self.registry.get_session(connection_id).await else {
            debug!(connection_id = %connection_id, "Message from connection without session");
            return Ok(());
        };

        if self.content_filter.is_profane(text) {
            info!(
                connection_id = %connection_id,
                room = %session.room,
                "Message rejected by content filter"
            );
            return Err(ChatError::ContentRejected);
        }

        let members = self.registry.sessions_in_room(&session.room).await;
        let message = ServerMessage::chat(session.username.clone(), text.to_string());
        self.deliver(Destination::Room, &session, &members, &message)
            .await;

        Ok(())
    }

    pub async fn send_location(
        &self,
        connection_id: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<(), ChatError> {
        let Some(session) = self.registry.get_session(connection_id).await else {
            debug!(connection_id = %connection_id, "Location from connection without session");
            return Ok(());
        };

        let members = self.registry.sessions_in_room(&session.room).await;
        let message = ServerMessage::location(session.username.clone(), latitude, longitude);
        self.deliver(Destination::Room, &session, &members, &message)
            .await;

        Ok(())
    }

    /// Tears down the connection's session and tells the rest of the room
    pub async fn disconnect(&self, connection_id: &str) {
        let Some(session) = self.registry.remove_session(connection_id).await else {
            debug!(connection_id = %connection_id, "Disconnect without session");
            return;
        };

        info!(
            connection_id = %connection_id,
            username = %session.username,
            room = %session.room,
            "User left room"
        );

        self.announce_departure(&session).await;
    }

    /// Tells the rest of `departed`'s room that it left and sends them the new roster
    async fn announce_departure(&self, departed: &Session) {
        let remaining: Vec<Session> = self
            .registry
            .sessions_in_room(&departed.room)
            .await
            .into_iter()
            .filter(|s| s.connection_id != departed.connection_id)
            .collect();

        self.deliver(
            Destination::RoomExceptSender,
            departed,
            &remaining,
            &ServerMessage::user_left(&departed.username),
        )
        .await;
        self.broadcast_roster(departed, &remaining).await;
    }

    async fn broadcast_roster(&self, session: &Session, members: &[Session]) {
        let users = self.registry.list_sessions_in_room(&session.room).await;
        let roster = ServerMessage::room_data(session.room.clone(), users);
        self.deliver(Destination::Room, session, members, &roster)
            .await;
    }

    async fn deliver(
        &self,
        destination: Destination,
        sender: &Session,
        members: &[Session],
        message: &ServerMessage,
    ) {
        let message_json = match serde_json::to_string(message) {
            Ok(json) => json,
            Err(e) => {
                warn!(
                    event = message.event_name(),
                    error = %e,
                    "Failed to serialize outbound message"
                );
                return;
            }
        };

        let recipients = select_recipients(destination, &sender.connection_id, members);
        debug!(
            event = message.event_name(),
            room = %sender.room,
            recipients = recipients.len(),
            "Delivering message"
        );
        self.connection_manager
            .send_to_connections(&recipients, &message_json)
            .await;
    }
}
