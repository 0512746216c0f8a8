//! Configuration management for the server.
//!
//! Configuration is built explicitly from command-line arguments and passed
//! to whichever transport needs it. There is no ambient global state and no
//! environment-variable driven feature configuration.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "expense-policy-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build configuration from command-line arguments.
    ///
    /// Recognized flags:
    /// - `--http` selects the HTTP transport (default is stdio)
    /// - `--port <n>` overrides the default HTTP port 3000
    ///
    /// Unrecognized arguments are ignored.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut config = Self::default();
        config.transport = TransportConfig::from_args(args)
            .map_err(Error::Config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_server_identity() {
        let config = Config::default();
        assert_eq!(config.server.name, "expense-policy-mcp-server");
        assert_eq!(config.server.version, "1.0.0");
    }

    #[test]
    fn test_no_args_selects_stdio() {
        let config = Config::from_args(args(&[])).unwrap();
        assert!(config.transport.is_stdio());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_flag_selects_http() {
        let config = Config::from_args(args(&["--http"])).unwrap();
        assert!(!config.transport.is_stdio());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_port_flag_overrides_default() {
        let config = Config::from_args(args(&["--http", "--port", "8123"])).unwrap();
        match config.transport {
            TransportConfig::Http(ref http) => assert_eq!(http.port, 8123),
            _ => panic!("Expected HTTP transport"),
        }
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = Config::from_args(args(&["--http", "--port", "not-a-number"]));
        assert!(result.is_err());
    }
}
