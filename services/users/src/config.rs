//! HTTP listener configuration

use anyhow::{Context, Result};
use std::env;

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 8080;

/// Listener configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port the HTTP server binds to
    pub port: u16,
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables
    ///
    /// # Environment Variables
    /// - `PORT`: TCP port for the HTTP listener (default: 8080)
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {:?}", value))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(ServerConfig { port })
    }

    /// Address the listener binds to, on all interfaces
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_server_config_defaults_to_8080() {
        unsafe {
            env::remove_var("PORT");
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    #[serial]
    fn test_server_config_reads_port() {
        unsafe {
            env::set_var("PORT", "3001");
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:3001");

        unsafe {
            env::remove_var("PORT");
        }
    }

    #[test]
    #[serial]
    fn test_server_config_rejects_garbage_port() {
        unsafe {
            env::set_var("PORT", "eighty");
        }

        let err = ServerConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("PORT"));

        unsafe {
            env::remove_var("PORT");
        }
    }
}
