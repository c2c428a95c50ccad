use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, CorsConfig,
    DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, LoggingConfig, ServerConfig, ValidationConfig,
    WebSocketConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub websocket: WebSocketConfig,
    pub validation: ValidationConfig,
    pub cors: CorsConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. FORUM_CONFIG_DIR env var, else ./.forum/
    /// 2. Create the config directory if missing
    /// 3. Parse config.toml if present, else defaults
    /// 4. Apply FORUM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: FORUM_CONFIG_DIR env var > ./.forum/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&config_dir)?;
        self.websocket.validate()?;
        self.validation.validate()?;

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute log file path, or None when logging to stdout.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(Self::config_dir()?.join(&self.logging.dir).join(file))),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (never logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} connections)",
            self.server.host, self.server.port, self.server.max_connections
        );
        info!(
            "  database: {} (pool {})",
            self.database.path, self.database.max_connections
        );

        let auth_type = if self.auth.jwt_secret.is_some() {
            "HS256"
        } else if self.auth.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        };

        info!(
            "  auth: {} ({})",
            if self.auth.enabled {
                "enabled"
            } else {
                "disabled"
            },
            auth_type
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );

        info!(
            "  websocket: buffer={}, hub={}, heartbeat={}s/{}s",
            self.websocket.send_buffer_size,
            self.websocket.hub_event_capacity,
            self.websocket.heartbeat_interval_secs,
            self.websocket.heartbeat_timeout_secs
        );

        info!(
            "  validation: title={}, content={}",
            self.validation.max_title_length, self.validation.max_content_length
        );

        info!("  cors: {:?}", self.cors.allowed_origins);
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("FORUM_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("FORUM_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "FORUM_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );

        // Database
        Self::apply_env_string("FORUM_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "FORUM_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_bool("FORUM_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("FORUM_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "FORUM_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );

        // Logging
        Self::apply_env_parse("FORUM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FORUM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("FORUM_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("FORUM_LOG_FILE", &mut self.logging.file);

        // WebSocket
        Self::apply_env_parse(
            "FORUM_WS_SEND_BUFFER_SIZE",
            &mut self.websocket.send_buffer_size,
        );
        Self::apply_env_parse(
            "FORUM_WS_HUB_EVENT_CAPACITY",
            &mut self.websocket.hub_event_capacity,
        );
        Self::apply_env_parse(
            "FORUM_WS_HEARTBEAT_INTERVAL_SECS",
            &mut self.websocket.heartbeat_interval_secs,
        );
        Self::apply_env_parse(
            "FORUM_WS_HEARTBEAT_TIMEOUT_SECS",
            &mut self.websocket.heartbeat_timeout_secs,
        );
        Self::apply_env_list(
            "FORUM_WS_ALLOWED_ORIGINS",
            &mut self.websocket.allowed_origins,
        );

        // Validation
        Self::apply_env_parse(
            "FORUM_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        Self::apply_env_parse(
            "FORUM_VALIDATION_MAX_CONTENT_LENGTH",
            &mut self.validation.max_content_length,
        );

        // CORS
        Self::apply_env_list("FORUM_CORS_ALLOWED_ORIGINS", &mut self.cors.allowed_origins);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Comma separated; an empty value clears the list
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
