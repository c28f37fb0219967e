//! Server configuration, read from the environment at startup.

use std::net::SocketAddr;

use thiserror::Error;

use libris_infra::{ConfigError, LendingPolicy};

pub const BIND_ADDR_VAR: &str = "LIBRIS_BIND_ADDR";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ApiConfigError {
    #[error("LIBRIS_BIND_ADDR is not a socket address: {value:?}")]
    BindAddr { value: String },

    #[error(transparent)]
    Lending(#[from] ConfigError),
}

#[derive(Debug, Clone, Copy)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub policy: LendingPolicy,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ApiConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiConfigError> {
        let raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw
            .trim()
            .parse()
            .map_err(|_| ApiConfigError::BindAddr { value: raw.clone() })?;

        Ok(Self {
            bind_addr,
            policy: LendingPolicy::from_lookup(lookup)?,
        })
    }
}
