use thiserror::Error;

use crate::registry::RegistryError;

/// Failures reported back to the client through the acknowledgement
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error(transparent)]
    Validation(#[from] RegistryError),

    #[error("Profanity is not allowed. Message was rejected.")]
    ContentRejected,
}
