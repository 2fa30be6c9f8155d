//! HTTP server settings.

use serde::Deserialize;

/// Environment variable overriding [`ServerConfig::host`].
pub const HOST_ENV: &str = "BETCALC_HOST";
/// Environment variable overriding [`ServerConfig::port`].
pub const PORT_ENV: &str = "BETCALC_PORT";

/// Address the calculation API binds to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    8080
}

impl ServerConfig {
    /// `host:port` string for binding.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
