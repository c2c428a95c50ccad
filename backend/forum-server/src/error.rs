use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] forum_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] forum_db::DbError),

    #[error("Auth error: {0}")]
    Auth(#[from] forum_auth::AuthError),

    #[error("Failed to read JWT key file {path}: {source}")]
    JwtKeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Metrics exporter error: {message}")]
    Metrics { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
