//! Runtime configuration.
//!
//! Logging is configured separately through `RUST_LOG` (see [`setup_tracing`](super::setup_tracing)).

use std::num::NonZeroUsize;
use thiserror::Error;

/// Default capacity of the shop actor's request channel.
pub const DEFAULT_CHANNEL_CAPACITY: NonZeroUsize = match NonZeroUsize::new(32) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

/// Environment variable overriding the channel capacity.
pub const CHANNEL_CAPACITY_ENV: &str = "SHOP_CHANNEL_CAPACITY";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Settings for [`ShopSystem`](super::ShopSystem).
///
/// Built through [`ShopConfig::new`] or the environment loaders, which reject a
/// zero channel capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    /// Requests that may queue before callers wait for room.
    channel_capacity: NonZeroUsize,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl ShopConfig {
    /// Creates a configuration with the given request channel capacity.
    pub fn new(channel_capacity: usize) -> Result<Self, ConfigError> {
        let channel_capacity =
            NonZeroUsize::new(channel_capacity).ok_or_else(|| ConfigError::InvalidValue {
                key: "channel_capacity".to_string(),
                value: channel_capacity.to_string(),
                reason: "must be greater than zero".to_string(),
            })?;
        Ok(Self { channel_capacity })
    }

    pub fn channel_capacity(&self) -> usize {
        self.channel_capacity.get()
    }

    pub(crate) fn capacity(&self) -> NonZeroUsize {
        self.channel_capacity
    }

    /// Reads the configuration from the process environment, falling back to
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(CHANNEL_CAPACITY_ENV) {
            let invalid = |reason: &str| ConfigError::InvalidValue {
                key: CHANNEL_CAPACITY_ENV.to_string(),
                value: raw.clone(),
                reason: reason.to_string(),
            };
            let capacity: usize = raw.trim().parse().map_err(|_| invalid("not a number"))?;
            config.channel_capacity =
                NonZeroUsize::new(capacity).ok_or_else(|| invalid("must be greater than zero"))?;
        }
        Ok(config)
    }
}
