//! Call Grid configuration.
//!
//! Configuration is loaded from environment variables. Every field has a
//! default, so an empty environment yields a phone-class session.

use crate::geometry::DeviceClass;
use std::collections::HashMap;
use std::env;
use thiserror::Error;

/// Default session mailbox capacity.
pub const DEFAULT_MAILBOX_BUFFER: usize = 500;

/// Call Grid configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Device class that picks the capacity limit and grid table (default: phone).
    pub device_class: DeviceClass,

    /// Maximum number of remote participants shown at once.
    ///
    /// Defaults to the device class capacity; may only be lowered.
    pub visible_limit: usize,

    /// Bounded mailbox size for the session actor (default: 500).
    pub mailbox_buffer: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Default configuration for a device class.
    #[must_use]
    pub fn for_device(device_class: DeviceClass) -> Self {
        Self {
            device_class,
            visible_limit: device_class.visible_participant_limit(),
            mailbox_buffer: DEFAULT_MAILBOX_BUFFER,
        }
    }

    /// Override the visible limit, clamped to `1..=` the device capacity.
    #[must_use]
    pub fn with_visible_limit(mut self, limit: usize) -> Self {
        self.visible_limit = limit.clamp(1, self.device_class.visible_participant_limit());
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a `HashMap` (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let device_class = match vars.get("CALL_GRID_DEVICE_CLASS") {
            Some(value) => value.parse().map_err(|_| {
                ConfigError::InvalidValue(format!("CALL_GRID_DEVICE_CLASS={value}"))
            })?,
            None => DeviceClass::Phone,
        };

        let capacity = device_class.visible_participant_limit();
        let visible_limit = match vars.get("CALL_GRID_VISIBLE_LIMIT") {
            Some(value) => {
                let limit: usize = value.parse().map_err(|_| {
                    ConfigError::InvalidValue(format!("CALL_GRID_VISIBLE_LIMIT={value}"))
                })?;
                // The grid table has no shape beyond the device capacity.
                if limit == 0 || limit > capacity {
                    return Err(ConfigError::InvalidValue(format!(
                        "CALL_GRID_VISIBLE_LIMIT must be between 1 and {capacity}, got {limit}"
                    )));
                }
                limit
            }
            None => capacity,
        };

        let mailbox_buffer = match vars.get("CALL_GRID_MAILBOX_BUFFER") {
            Some(value) => match value.parse::<usize>() {
                Ok(buffer) if buffer > 0 => buffer,
                _ => {
                    return Err(ConfigError::InvalidValue(format!(
                        "CALL_GRID_MAILBOX_BUFFER={value}"
                    )))
                }
            },
            None => DEFAULT_MAILBOX_BUFFER,
        };

        Ok(Config {
            device_class,
            visible_limit,
            mailbox_buffer,
        })
    }
}
