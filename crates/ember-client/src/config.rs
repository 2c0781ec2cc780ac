//! Client configuration loaded from environment variables.
//!
//! Everything except the DHT bootstrap node has a default. The client
//! refuses to start without a bootstrap node.

use std::net::IpAddr;

use thiserror::Error;

use ember_shared::constants::{DEFAULT_ACCEPTED_NAME_LEN, DEFAULT_INVITATION_MESSAGE};
use ember_shared::types::PeerId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No DHT bootstrap node configured (set EMBER_DHT_USER_ID, EMBER_DHT_IP, EMBER_DHT_PORT)")]
    MissingBootstrap,

    #[error("Bootstrap user id is empty")]
    EmptyUserId,

    #[error("Invalid bootstrap IP address: {0}")]
    InvalidIp(String),

    #[error("Invalid bootstrap port: {0}")]
    InvalidPort(String),
}

/// DHT node the networking core joins on startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapNode {
    pub user_id: PeerId,
    pub ip: IpAddr,
    pub port: u16,
}

impl BootstrapNode {
    pub fn parse(user_id: &str, ip: &str, port: &str) -> Result<Self, ConfigError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(ConfigError::EmptyUserId);
        }
        let ip = ip
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidIp(ip.to_string()))?;
        let port = match port.trim().parse::<u16>() {
            Ok(0) | Err(_) => return Err(ConfigError::InvalidPort(port.to_string())),
            Ok(p) => p,
        };

        Ok(Self {
            user_id: PeerId::new(user_id),
            ip,
            port,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Env: `EMBER_DHT_USER_ID`, `EMBER_DHT_IP`, `EMBER_DHT_PORT`
    /// Default: none
    pub bootstrap: Option<BootstrapNode>,

    /// Text prefilled into the add-friend form.
    /// Env: `EMBER_INVITATION_MESSAGE`
    pub invitation_message: String,

    /// Id prefix length used to name peers accepted from a friend request.
    /// Env: `EMBER_ACCEPTED_NAME_LEN`
    /// Default: `5`
    pub accepted_name_len: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            bootstrap: None,
            invitation_message: DEFAULT_INVITATION_MESSAGE.to_string(),
            accepted_name_len: DEFAULT_ACCEPTED_NAME_LEN,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        match (
            lookup("EMBER_DHT_USER_ID"),
            lookup("EMBER_DHT_IP"),
            lookup("EMBER_DHT_PORT"),
        ) {
            (Some(user_id), Some(ip), Some(port)) => {
                match BootstrapNode::parse(&user_id, &ip, &port) {
                    Ok(node) => config.bootstrap = Some(node),
                    Err(e) => tracing::warn!(error = %e, "Ignoring bootstrap node"),
                }
            }
            (None, None, None) => {}
            _ => tracing::warn!("Incomplete bootstrap node settings, ignoring"),
        }

        if let Some(message) = lookup("EMBER_INVITATION_MESSAGE") {
            if !message.is_empty() {
                config.invitation_message = message;
            }
        }

        if let Some(val) = lookup("EMBER_ACCEPTED_NAME_LEN") {
            match val.parse::<usize>() {
                Ok(n) if n > 0 => config.accepted_name_len = n,
                _ => tracing::warn!(value = %val, "Invalid EMBER_ACCEPTED_NAME_LEN, using default"),
            }
        }

        config
    }

    pub fn require_bootstrap(&self) -> Result<&BootstrapNode, ConfigError> {
        self.bootstrap.as_ref().ok_or(ConfigError::MissingBootstrap)
    }
}
