use crate::EvictionReason;

use metrics::{counter, gauge};

/// Metrics collector for live chat
#[derive(Debug, Clone)]
pub struct ChatMetrics {
    prefix: &'static str,
}

impl ChatMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "forum_chat",
        }
    }

    pub fn connection_established(&self) {
        counter!(format!("{}.connections.established", self.prefix)).increment(1);
    }

    pub fn connection_closed(&self, reason: &str) {
        counter!(format!("{}.connections.closed", self.prefix)).increment(1);
        counter!(format!("{}.connections.closed.{}", self.prefix, reason)).increment(1);
    }

    pub fn connection_rejected(&self, reason: &str) {
        counter!(format!("{}.connections.rejected.{}", self.prefix, reason)).increment(1);
    }

    /// Registry size, set by the hub after every membership change
    pub fn active_connections(&self, count: usize) {
        gauge!(format!("{}.connections.active", self.prefix)).set(count as f64);
    }

    pub fn connection_evicted(&self, reason: EvictionReason) {
        counter!(format!("{}.connections.evicted", self.prefix)).increment(1);
        counter!(format!(
            "{}.connections.evicted.{}",
            self.prefix,
            reason.as_str()
        ))
        .increment(1);
    }

    pub fn message_received(&self) {
        counter!(format!("{}.messages.received", self.prefix)).increment(1);
    }

    pub fn message_sent(&self) {
        counter!(format!("{}.messages.sent", self.prefix)).increment(1);
    }

    pub fn broadcast_published(&self, delivered: usize) {
        counter!(format!("{}.broadcast.published", self.prefix)).increment(1);
        counter!(format!("{}.broadcast.delivered", self.prefix)).increment(delivered as u64);
    }

    pub fn error_occurred(&self, error_type: &str) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.{}", self.prefix, error_type)).increment(1);
    }
}

impl Default for ChatMetrics {
    fn default() -> Self {
        Self::new()
    }
}
