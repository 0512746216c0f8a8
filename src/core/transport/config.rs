//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[cfg(feature = "stdio")]
    Stdio,

    /// HTTP transport with REST endpoints.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

#[cfg(feature = "http")]
const DEFAULT_HTTP_PORT: u16 = 3000;

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "stdio"), feature = "http"))]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio or http");
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_HTTP_PORT,
            host: default_host(),
            enable_cors: default_cors(),
        }
    }
}

impl TransportConfig {
    /// Build transport config from command-line arguments.
    ///
    /// `--http` selects the HTTP transport, `--port <n>` overrides the
    /// default HTTP port. Without `--http` the stdio transport is used and
    /// `--port` has no effect. Unrecognized arguments are ignored.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut use_http = false;
        let mut port: Option<u16> = None;

        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--http" => use_http = true,
                "--port" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| "--port requires a value".to_string())?;
                    port = Some(
                        value
                            .parse()
                            .map_err(|_| format!("Invalid port: {}", value))?,
                    );
                }
                _ => {}
            }
        }

        if use_http {
            #[cfg(feature = "http")]
            {
                let mut config = HttpConfig::default();
                if let Some(port) = port {
                    config.port = port;
                }
                return Ok(Self::Http(config));
            }
            #[cfg(not(feature = "http"))]
            {
                return Err("This build does not include the HTTP transport".to_string());
            }
        }

        #[cfg(feature = "stdio")]
        {
            Ok(Self::Stdio)
        }
        #[cfg(not(feature = "stdio"))]
        {
            Ok(Self::Http(HttpConfig::default()))
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}", cfg.host, cfg.port),
        }
    }

    /// Check if this transport is the standard STDIO mode.
    pub fn is_stdio(&self) -> bool {
        #[cfg(feature = "stdio")]
        {
            matches!(self, Self::Stdio)
        }
        #[cfg(not(feature = "stdio"))]
        {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_is_stdio() {
        assert!(TransportConfig::default().is_stdio());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_default_port() {
        let config = TransportConfig::from_args(args(&["--http"])).unwrap();
        match config {
            TransportConfig::Http(http) => assert_eq!(http.port, 3000),
            _ => panic!("Expected HTTP transport"),
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_port_without_http_keeps_stdio() {
        let config = TransportConfig::from_args(args(&["--port", "9999"])).unwrap();
        assert!(config.is_stdio());
    }

    #[test]
    fn test_port_missing_value() {
        let result = TransportConfig::from_args(args(&["--http", "--port"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_args_ignored() {
        let config = TransportConfig::from_args(args(&["--verbose"])).unwrap();
        assert!(config.is_stdio());
    }
}
