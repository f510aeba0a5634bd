//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `XCHAIN_AI_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::{IpAddr, SocketAddr};

use crate::constants::{DEFAULT_TOP_K, MAX_TOP_K, MIN_TOP_K};

/// Service configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `XCHAIN_AI_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8500`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// `top_k` applied to similarity requests that omit it. Default: `5`.
    pub default_top_k: u32,
}

/// Port the marketplace API expects the scoring service on.
pub const DEFAULT_PORT: u16 = 8500;

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            default_top_k: DEFAULT_TOP_K,
        }
    }
}

impl Config {
    pub const ENV_PORT: &'static str = "XCHAIN_AI_PORT";
    pub const ENV_BIND_ADDR: &'static str = "XCHAIN_AI_BIND_ADDR";
    pub const ENV_DEFAULT_TOP_K: &'static str = "XCHAIN_AI_DEFAULT_TOP_K";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let default_top_k = Self::parse_top_k_from_env(defaults.default_top_k)?;

        Ok(Self {
            port,
            bind_addr,
            default_top_k,
        })
    }

    /// Checks invariants that parsing alone cannot guarantee.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_TOP_K..=MAX_TOP_K).contains(&self.default_top_k) {
            return Err(ConfigError::InvalidTopK {
                value: self.default_top_k.to_string(),
            });
        }
        Ok(())
    }

    /// Returns the listen address as a string; IPv6 hosts are bracketed.
    pub fn socket_addr(&self) -> String {
        self.listen_addr().to_string()
    }

    /// Address to bind the listener to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_top_k_from_env(default: u32) -> Result<u32, ConfigError> {
        match env::var(Self::ENV_DEFAULT_TOP_K) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::TopKParseError { value, source: e }),
            Err(_) => Ok(default),
        }
    }
}
