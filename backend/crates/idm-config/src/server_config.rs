use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SHUTDOWN_TIMEOUT_SECS,
    MAX_SHUTDOWN_TIMEOUT_SECS, MIN_PORT, MIN_SHUTDOWN_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Grace period for in-flight requests after a shutdown signal
    pub shutdown_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::server("server.host cannot be empty"));
        }

        // Port 0 means "auto-assign" - OS picks an available port.
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::server(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if self.shutdown_timeout_secs < MIN_SHUTDOWN_TIMEOUT_SECS
            || self.shutdown_timeout_secs > MAX_SHUTDOWN_TIMEOUT_SECS
        {
            return Err(ConfigError::server(format!(
                "server.shutdown_timeout_secs must be {}-{}, got {}",
                MIN_SHUTDOWN_TIMEOUT_SECS, MAX_SHUTDOWN_TIMEOUT_SECS, self.shutdown_timeout_secs
            )));
        }

        Ok(())
    }
}
