use std::sync::Arc;

use roomchat::{
    ChatRouter, ContentFilter, InMemorySessionRegistry, WebsocketReceiveHandler, WordListFilter,
};

use super::mocks::{LiteralFilter, MockConnectionManager};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub registry: Arc<InMemorySessionRegistry>,
    pub mock_conn_manager: Arc<MockConnectionManager>,
    pub router: Arc<ChatRouter>,
    pub input_handler: WebsocketReceiveHandler,
}

pub struct TestSetupBuilder {
    content_filter: Arc<dyn ContentFilter>,
    members: Vec<(String, String, String)>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            content_filter: Arc::new(LiteralFilter("damn")),
            members: vec![],
        }
    }

    pub fn with_filter(mut self, filter: Arc<dyn ContentFilter>) -> Self {
        self.content_filter = filter;
        self
    }

    pub fn with_default_word_list(self) -> Self {
        self.with_filter(Arc::new(WordListFilter::default()))
    }

    /// Pre-join a connection before the test starts
    pub fn with_member(mut self, connection_id: &str, username: &str, room: &str) -> Self {
        self.members.push((
            connection_id.to_string(),
            username.to_string(),
            room.to_string(),
        ));
        self
    }

    /// c1 = alice, c2 = bob, both in room "r"
    pub fn with_two_members(self) -> Self {
        self.with_member("c1", "alice", "r").with_member("c2", "bob", "r")
    }

    pub async fn build(self) -> TestSetup {
        let registry = Arc::new(InMemorySessionRegistry::new());
        let mock_conn_manager = Arc::new(MockConnectionManager::new());

        let router = Arc::new(ChatRouter::new(
            registry.clone(),
            mock_conn_manager.clone(),
            self.content_filter,
        ));
        let input_handler = WebsocketReceiveHandler::new(router.clone(), mock_conn_manager.clone());

        for (connection_id, username, room) in &self.members {
            router
                .join(connection_id, username, room)
                .await
                .expect("pre-joined member should be accepted");
        }
        // Tests only look at what happens after setup
        mock_conn_manager.clear_messages().await;

        TestSetup {
            registry,
            mock_conn_manager,
            router,
            input_handler,
        }
    }
}
