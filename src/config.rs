//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port on all interfaces (default 3000)
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidPort`] if `PORT` is not a valid `u16`.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_port_var(std::env::var("PORT").ok().as_deref())
    }

    fn from_port_var(raw: Option<&str>) -> Result<Self, ServerError> {
        let port = match raw {
            None => DEFAULT_PORT,
            Some(v) => v
                .trim()
                .parse::<u16>()
                .map_err(|_| ServerError::InvalidPort(v.to_owned()))?,
        };
        Ok(Self { port })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
