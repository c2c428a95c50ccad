use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Outbound queue capacity per connection
pub const MIN_SEND_BUFFER_SIZE: usize = 1;
pub const MAX_SEND_BUFFER_SIZE: usize = 10000;
pub const DEFAULT_SEND_BUFFER_SIZE: usize = 256;

// Hub event queue capacity
pub const MIN_HUB_EVENT_CAPACITY: usize = 16;
pub const MAX_HUB_EVENT_CAPACITY: usize = 100000;
pub const DEFAULT_HUB_EVENT_CAPACITY: usize = 1024;

// Heartbeat interval constraints (seconds)
pub const MIN_HEARTBEAT_INTERVAL_SECS: u64 = 5;
pub const MAX_HEARTBEAT_INTERVAL_SECS: u64 = 300;
pub const DEFAULT_HEARTBEAT_INTERVAL_SECS: u64 = 30;

// Heartbeat timeout constraints (seconds)
pub const MIN_HEARTBEAT_TIMEOUT_SECS: u64 = 10;
pub const MAX_HEARTBEAT_TIMEOUT_SECS: u64 = 600;
pub const DEFAULT_HEARTBEAT_TIMEOUT_SECS: u64 = 60;

/// Live chat connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebSocketConfig {
    /// Outbound queue capacity; a connection whose queue fills up is evicted
    pub send_buffer_size: usize,
    /// Capacity of the hub's event queue
    pub hub_event_capacity: usize,
    /// Ping interval in seconds
    pub heartbeat_interval_secs: u64,
    /// A connection silent for this long is dropped
    pub heartbeat_timeout_secs: u64,
    /// Origins accepted on upgrade. Empty = any origin
    pub allowed_origins: Vec<String>,
}

impl Default for WebSocketConfig {
    fn default() -> Self {
        Self {
            send_buffer_size: DEFAULT_SEND_BUFFER_SIZE,
            hub_event_capacity: DEFAULT_HUB_EVENT_CAPACITY,
            heartbeat_interval_secs: DEFAULT_HEARTBEAT_INTERVAL_SECS,
            heartbeat_timeout_secs: DEFAULT_HEARTBEAT_TIMEOUT_SECS,
            allowed_origins: Vec::new(),
        }
    }
}

impl WebSocketConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.send_buffer_size < MIN_SEND_BUFFER_SIZE
            || self.send_buffer_size > MAX_SEND_BUFFER_SIZE
        {
            return Err(ConfigError::config(format!(
                "websocket.send_buffer_size must be {}-{}, got {}",
                MIN_SEND_BUFFER_SIZE, MAX_SEND_BUFFER_SIZE, self.send_buffer_size
            )));
        }

        if self.hub_event_capacity < MIN_HUB_EVENT_CAPACITY
            || self.hub_event_capacity > MAX_HUB_EVENT_CAPACITY
        {
            return Err(ConfigError::config(format!(
                "websocket.hub_event_capacity must be {}-{}, got {}",
                MIN_HUB_EVENT_CAPACITY, MAX_HUB_EVENT_CAPACITY, self.hub_event_capacity
            )));
        }

        if self.heartbeat_interval_secs < MIN_HEARTBEAT_INTERVAL_SECS
            || self.heartbeat_interval_secs > MAX_HEARTBEAT_INTERVAL_SECS
        {
            return Err(ConfigError::config(format!(
                "websocket.heartbeat_interval_secs must be {}-{}, got {}",
                MIN_HEARTBEAT_INTERVAL_SECS,
                MAX_HEARTBEAT_INTERVAL_SECS,
                self.heartbeat_interval_secs
            )));
        }

        if self.heartbeat_timeout_secs < MIN_HEARTBEAT_TIMEOUT_SECS
            || self.heartbeat_timeout_secs > MAX_HEARTBEAT_TIMEOUT_SECS
        {
            return Err(ConfigError::config(format!(
                "websocket.heartbeat_timeout_secs must be {}-{}, got {}",
                MIN_HEARTBEAT_TIMEOUT_SECS, MAX_HEARTBEAT_TIMEOUT_SECS, self.heartbeat_timeout_secs
            )));
        }

        if self.heartbeat_timeout_secs <= self.heartbeat_interval_secs {
            return Err(ConfigError::config(format!(
                "websocket.heartbeat_timeout_secs ({}) must be greater than heartbeat_interval_secs ({})",
                self.heartbeat_timeout_secs, self.heartbeat_interval_secs
            )));
        }

        Ok(())
    }
}
