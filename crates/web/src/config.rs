//! Process configuration, read from the environment.

use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;

pub const BIND_ADDR_ENV: &str = "BASESHOP_BIND_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {source}")]
    InvalidBindAddr {
        key: &'static str,
        value: String,
        #[source]
        source: AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub bind_addr: SocketAddr,
}

impl WebConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = lookup(BIND_ADDR_ENV).unwrap_or_else(|| {
            tracing::debug!("{BIND_ADDR_ENV} not set; using {DEFAULT_BIND_ADDR}");
            DEFAULT_BIND_ADDR.to_string()
        });

        let bind_addr = value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                key: BIND_ADDR_ENV,
                value: value.clone(),
                source,
            })?;

        Ok(Self { bind_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = WebConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
    }

    #[test]
    fn reads_bind_addr() {
        let config = WebConfig::from_lookup(|key| {
            (key == BIND_ADDR_ENV).then(|| "127.0.0.1:9000".to_string())
        })
        .unwrap();
        assert_eq!(config.bind_addr.port(), 9000);
    }

    #[test]
    fn rejects_malformed_bind_addr() {
        let err = WebConfig::from_lookup(|_| Some("localhost".to_string())).unwrap_err();
        assert!(err.to_string().contains(BIND_ADDR_ENV));
    }
}
