//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `PORT`: listen port. Default: `3000`
//! - `PUBLIC_DIR`: directory of static client files served at `/`. Unset disables static serving
//! - `CHAT_BLOCKED_WORDS`: comma separated words added to the default profanity list

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub public_dir: Option<PathBuf>,
    pub blocked_words: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            public_dir: None,
            blocked_words: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load server configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;

        info!(
            port = config.port,
            public_dir = ?config.public_dir,
            extra_blocked_words = config.blocked_words.len(),
            "Server configuration loaded"
        );

        Ok(config)
    }

    /// Builds the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let public_dir = lookup("PUBLIC_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let blocked_words = lookup("CHAT_BLOCKED_WORDS")
            .map(|raw| {
                raw.split(',')
                    .map(|w| w.trim().to_string())
                    .filter(|w| !w.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            port,
            public_dir,
            blocked_words,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
