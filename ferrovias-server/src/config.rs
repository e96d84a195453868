//! Server configuration.
//!
//! Read once from environment variables at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::upstream::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, UpstreamConfig};

/// Address to listen on when `FERROVIAS_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8085";

const BIND_ADDR_VAR: &str = "FERROVIAS_BIND_ADDR";
const UPSTREAM_URL_VAR: &str = "FERROVIAS_UPSTREAM_URL";
const TIMEOUT_VAR: &str = "FERROVIAS_TIMEOUT_SECS";
const MOCK_DIR_VAR: &str = "FERROVIAS_MOCK_DIR";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Bind address did not parse as `host:port`
    #[error("invalid FERROVIAS_BIND_ADDR {value:?}: {reason}")]
    BindAddr { value: String, reason: String },

    /// Timeout was not a positive integer
    #[error("invalid FERROVIAS_TIMEOUT_SECS {0:?}: must be a positive number of seconds")]
    Timeout(String),
}

/// Runtime configuration for the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,
    /// Upstream client settings
    pub upstream: UpstreamConfig,
    /// Serve saved pages from this directory instead of the live upstream
    pub mock_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a variable lookup function.
    ///
    /// Unset or blank variables fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_value = get(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .trim()
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::BindAddr {
                value: bind_value.clone(),
                reason: e.to_string(),
            })?;

        let timeout_secs = match get(TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::Timeout(raw)),
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let upstream = UpstreamConfig::new()
            .with_base_url(get(UPSTREAM_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))
            .with_timeout(timeout_secs);

        Ok(Self {
            bind_addr,
            upstream,
            mock_dir: get(MOCK_DIR_VAR).map(PathBuf::from),
        })
    }
}
