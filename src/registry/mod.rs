// Public API - what other modules can use
pub use errors::RegistryError;
pub use models::{Session, UserSummary};
pub use repository::{InMemorySessionRegistry, SessionRegistry};

// Internal modules
mod errors;
pub mod models;
pub mod repository;
