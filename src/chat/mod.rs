// Public API - what other modules can use
pub use errors::ChatError;
pub use messages::{
    Ack, ChatMessage, ClientEvent, ClientFrame, LocationMessage, RoomData, ServerMessage,
};
pub use recipients::{select_recipients, Destination};
pub use router::ChatRouter;

// Internal modules
mod errors;
pub mod messages;
mod recipients;
mod router;
