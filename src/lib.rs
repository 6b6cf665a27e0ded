// Library crate for the room chat relay
// This file exposes the public API for integration tests

pub mod app;
pub mod chat;
pub mod config;
pub mod filter;
pub mod registry;
pub mod shared;
pub mod websockets;

// Re-export commonly used types for easier access in tests
pub use chat::{ChatError, ChatRouter, ClientEvent, ClientFrame, ServerMessage};
pub use config::ServerConfig;
pub use filter::{ContentFilter, WordListFilter};
pub use registry::{InMemorySessionRegistry, Session, SessionRegistry, UserSummary};
pub use shared::{AppError, AppState};
pub use websockets::{
    ConnectionManager, InMemoryConnectionManager, MessageHandler, WebsocketReceiveHandler,
};
