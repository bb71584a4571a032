//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ServiceError;

/// Default request body limit (1 MiB).
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Prefix for every configuration variable (`CHAT_ECHO_PORT`, ...).
pub const ENV_PREFIX: &str = "CHAT_ECHO_";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Listener ===
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Requests ===
    /// Largest accepted chat body in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Preflight cache duration advertised to browsers.
    #[serde(default)]
    pub cors_max_age_secs: Option<u64>,

    // === Logging ===
    /// Log level used when RUST_LOG is unset (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_body_bytes() -> usize {
    DEFAULT_BODY_LIMIT
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
            cors_max_age_secs: None,
            log_level: default_log_level(),
            verbose: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, ServiceError> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, ServiceError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter(vars)?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), ServiceError> {
        self.ip()?;

        if self.max_body_bytes == 0 {
            return Err(ServiceError::InvalidConfig(
                "MAX_BODY_BYTES must be greater than 0".to_string(),
            ));
        }

        if self.log_level.trim().is_empty() {
            return Err(ServiceError::InvalidConfig(
                "LOG_LEVEL must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Address the listener binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServiceError> {
        Ok(SocketAddr::new(self.ip()?, self.port))
    }

    /// Preflight max-age, if configured.
    pub fn cors_max_age(&self) -> Option<Duration> {
        self.cors_max_age_secs.map(Duration::from_secs)
    }

    fn ip(&self) -> Result<IpAddr, ServiceError> {
        self.host.parse().map_err(|_| {
            ServiceError::InvalidConfig(format!("HOST is not an IP address: {}", self.host))
        })
    }
}
