use std::sync::Arc;
use thiserror::Error;

use crate::chat::ChatRouter;
use crate::config::ConfigError;
use crate::filter::ContentFilter;
use crate::registry::SessionRegistry;
use crate::websockets::ConnectionManager;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub chat_router: Arc<ChatRouter>,
    pub connection_manager: Arc<dyn ConnectionManager>,
}

impl AppState {
    pub fn new(
        registry: Arc<dyn SessionRegistry>,
        connection_manager: Arc<dyn ConnectionManager>,
        content_filter: Arc<dyn ContentFilter>,
    ) -> Self {
        let chat_router = Arc::new(ChatRouter::new(
            registry,
            connection_manager.clone(),
            content_filter,
        ));

        Self {
            chat_router,
            connection_manager,
        }
    }
}

/// Fatal errors while starting or running the server
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
