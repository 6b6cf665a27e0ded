pub mod actions;
pub mod assertions;
pub mod mocks;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use assertions::{ack_error, chat_text, roster_usernames};
#[allow(unused_imports)]
pub use mocks::{LiteralFilter, MockConnectionManager};
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder};
