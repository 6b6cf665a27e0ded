use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};

use roomchat::{ConnectionManager, ContentFilter};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Records every outbound frame in delivery order
#[derive(Clone)]
pub struct MockConnectionManager {
    sent_messages: Arc<RwLock<Vec<(String, String)>>>,
    connected: Arc<RwLock<Vec<String>>>,
}

impl MockConnectionManager {
    pub fn new() -> Self {
        Self {
            sent_messages: Arc::new(RwLock::new(Vec::new())),
            connected: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// All deliveries as (connection_id, raw json), oldest first
    pub async fn deliveries(&self) -> Vec<(String, String)> {
        self.sent_messages.read().await.clone()
    }

    pub async fn get_messages_for(&self, connection_id: &str) -> Vec<String> {
        self.sent_messages
            .read()
            .await
            .iter()
            .filter(|(id, _)| id == connection_id)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub async fn clear_messages(&self) {
        self.sent_messages.write().await.clear();
    }
}

#[async_trait]
impl ConnectionManager for MockConnectionManager {
    async fn add_connection(&self, connection_id: String, _sender: mpsc::UnboundedSender<String>) {
        self.connected.write().await.push(connection_id);
    }

    async fn remove_connection(&self, connection_id: &str) {
        self.connected.write().await.retain(|c| c != connection_id);
    }

    async fn send_to_connection(&self, connection_id: &str, message: &str) {
        self.sent_messages
            .write()
            .await
            .push((connection_id.to_string(), message.to_string()));
    }

    async fn send_to_connections(&self, connection_ids: &[String], message: &str) {
        for connection_id in connection_ids {
            self.send_to_connection(connection_id, message).await;
        }
    }

    async fn count_connections(&self) -> usize {
        self.connected.read().await.len()
    }
}

/// Flags exactly one literal text
pub struct LiteralFilter(pub &'static str);

impl ContentFilter for LiteralFilter {
    fn is_profane(&self, text: &str) -> bool {
        text == self.0
    }
}
