pub mod chat_message;
pub mod chat_session;
pub mod chat_state;
pub mod chat_use_case;
pub mod connection_config;
pub mod connection_id;
pub mod error;
pub mod error_ack;
pub mod hub;
pub mod hub_event;
pub mod hub_events;
pub mod hub_handle;
pub mod inbound_payload;
pub mod inbound_reader;
pub mod metrics;
pub mod outbound_writer;
pub mod replay;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod sql_chat_use_case;
pub mod subscriber;

pub use chat_message::ChatMessage;
pub use chat_session::ChatSession;
pub use chat_state::{ChatState, parse_thread_id, thread_chat_handler};
pub use chat_use_case::ChatUseCase;
pub use connection_config::ConnectionConfig;
pub use connection_id::ConnectionId;
pub use error::{ChatError, Result};
pub use error_ack::ErrorAck;
pub use hub::Hub;
pub use hub_event::HubEvent;
pub use hub_events::{EvictionReason, HubEvents, LogHubEvents};
pub use hub_handle::HubHandle;
pub use inbound_payload::InboundPayload;
pub use inbound_reader::{InboundReader, ReaderExit};
pub use metrics::ChatMetrics;
pub use outbound_writer::{OutboundWriter, WriterExit};
pub use replay::replay_history;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use sql_chat_use_case::SqlChatUseCase;
pub use subscriber::Subscriber;

#[cfg(test)]
mod tests;
