use forum_config::{ServerConfig, WebSocketConfig};

use std::time::Duration;

/// Per-connection settings for live chat sockets
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Outbound queue capacity; overflow evicts the connection
    pub send_buffer_size: usize,
    pub heartbeat_interval: Duration,
    /// No inbound frame for this long ends the connection
    pub heartbeat_timeout: Duration,
    /// Empty = any origin
    pub allowed_origins: Vec<String>,
    pub max_connections: usize,
}

impl ConnectionConfig {
    pub fn from_config(websocket: &WebSocketConfig, server: &ServerConfig) -> Self {
        Self {
            send_buffer_size: websocket.send_buffer_size,
            heartbeat_interval: Duration::from_secs(websocket.heartbeat_interval_secs),
            heartbeat_timeout: Duration::from_secs(websocket.heartbeat_timeout_secs),
            allowed_origins: websocket.allowed_origins.clone(),
            max_connections: server.max_connections,
        }
    }

    pub fn is_origin_allowed(&self, origin: Option<&str>) -> bool {
        if self.allowed_origins.is_empty() {
            return true;
        }

        origin.is_some_and(|origin| self.allowed_origins.iter().any(|allowed| allowed == origin))
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::from_config(&WebSocketConfig::default(), &ServerConfig::default())
    }
}
