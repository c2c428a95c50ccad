mod auth_config;
mod config;
mod cors_config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod validation_config;
mod websocket_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use cors_config::CorsConfig;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;
pub use websocket_config::WebSocketConfig;

#[cfg(test)]
mod tests;

pub const CONFIG_DIR_ENV: &str = "FORUM_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR_NAME: &str = ".forum";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 7777;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_CONNECTIONS: usize = 10000;
const MIN_MAX_CONNECTIONS: usize = 1;
const MAX_MAX_CONNECTIONS: usize = 100000;

const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

const DEFAULT_AUTH_ENABLED: bool = false;
const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
