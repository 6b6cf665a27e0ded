use thiserror::Error;

pub const MISSING_FIELDS: &str = "Username and room are required";
pub const USERNAME_IN_USE: &str = "Username is in use";

/// Errors raised while registering a session
///
/// The display text is shown to the joining client as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{0}")]
    Validation(String),
}

impl RegistryError {
    pub fn missing_fields() -> Self {
        RegistryError::Validation(MISSING_FIELDS.to_string())
    }

    pub fn username_in_use() -> Self {
        RegistryError::Validation(USERNAME_IN_USE.to_string())
    }
}
