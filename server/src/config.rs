//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build host config from environment variables (`.env` already loaded).
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when either variable is set but does
    /// not parse.
    pub fn from_env() -> Result<Self, ServerError> {
        let host = match std::env::var("HOST") {
            Ok(raw) => raw.trim().parse().map_err(|_| ServerError::Config(format!("invalid HOST: {raw}")))?,
            Err(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse().map_err(|_| ServerError::Config(format!("invalid PORT: {raw}")))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
