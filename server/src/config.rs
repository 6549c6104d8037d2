//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "crimesleuth_server=info,tower_http=info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: std::num::ParseIntError },
    #[error("invalid HOST {value:?}: {source}")]
    InvalidHost { value: String, source: std::net::AddrParseError },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPort { .. } => "E_CONFIG_PORT",
            Self::InvalidHost { .. } => "E_CONFIG_HOST",
            Self::Leptos(_) => "E_CONFIG_LEPTOS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `HOST` or `PORT` is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `HOST` or `PORT` is set but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let host = match lookup("HOST").filter(|v| !v.trim().is_empty()) {
            Some(value) => value.trim().parse().map_err(|source| ConfigError::InvalidHost { value, source })?,
            None => defaults.host,
        };
        let port = match lookup("PORT").filter(|v| !v.trim().is_empty()) {
            Some(value) => value.trim().parse().map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => defaults.port,
        };
        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
