//! Server configuration read from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const BIND_ADDR_VAR: &str = "CHESS_BIND_ADDR";
pub const STATIC_DIR_VAR: &str = "CHESS_STATIC_DIR";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_STATIC_DIR: &str = "./static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Build the config from the process environment.
    ///
    /// Optional:
    /// - `CHESS_BIND_ADDR`: default `127.0.0.1:8080`
    /// - `CHESS_STATIC_DIR`: default `./static`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr =
            raw_addr.trim().parse::<SocketAddr>().map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: raw_addr.clone(),
            })?;

        let static_dir = lookup(STATIC_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);

        Ok(Self { bind_addr, static_dir })
    }

    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}
