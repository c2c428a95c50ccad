use forum_auth::JwtValidator;
use forum_chat::{
    ChatMetrics, ChatState, ConnectionConfig, Hub, LogHubEvents, ShutdownCoordinator,
    SqlChatUseCase,
};
use forum_config::Config;
use forum_core::{ContentLimits, ContentValidator};
use forum_server::error::ServerError;
use forum_server::{AppState, build_router, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting forum-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = forum_db::connect(&database_path, config.database.max_connections).await?;
    info!("Database ready");

    let metrics_handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: e.to_string(),
        })?;

    let jwt_validator = build_jwt_validator(&config)?;

    let validator = ContentValidator::new(ContentLimits {
        max_title_length: config.validation.max_title_length,
        max_content_length: config.validation.max_content_length,
    });

    let shutdown = ShutdownCoordinator::new();
    let metrics = ChatMetrics::new();

    let (hub, hub_handle) = Hub::new(
        config.websocket.hub_event_capacity,
        Arc::new(LogHubEvents),
        metrics.clone(),
    );
    let hub_task = tokio::spawn(hub.run(shutdown.subscribe_guard()));

    let chat = ChatState {
        hub: hub_handle,
        use_case: Arc::new(SqlChatUseCase::new(pool.clone(), validator)),
        config: ConnectionConfig::from_config(&config.websocket, &config.server),
        metrics,
        shutdown: shutdown.clone(),
    };

    let app_state = AppState {
        pool: pool.clone(),
        jwt_validator,
        validator,
        chat,
        metrics_handle: Some(metrics_handle),
    };

    let app = build_router(app_state, &config.cors.allowed_origins);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => error!("Failed to listen for SIGINT: {}", e),
        }
    });

    let mut server_shutdown = shutdown.subscribe_guard();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            server_shutdown.wait().await;
        })
        .await?;

    if let Err(e) = hub_task.await {
        warn!("Chat hub task ended abnormally: {}", e);
    }

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

fn build_jwt_validator(config: &Config) -> Result<Option<Arc<JwtValidator>>, ServerError> {
    if !config.auth.enabled {
        warn!("Authentication DISABLED - callers identify with the X-User-Id header");
        return Ok(None);
    }

    let validator = match (&config.auth.jwt_secret, &config.auth.jwt_public_key_path) {
        (Some(secret), _) => {
            info!("JWT: HS256 authentication enabled");
            JwtValidator::with_hs256(secret.as_bytes())
        }
        (None, Some(key_path)) => {
            let full_path = Config::config_dir()?.join(key_path);
            let public_key =
                std::fs::read_to_string(&full_path).map_err(|e| ServerError::JwtKeyFile {
                    path: full_path.display().to_string(),
                    source: e,
                })?;
            info!("JWT: RS256 authentication enabled");
            JwtValidator::with_rs256(&public_key)?
        }
        (None, None) => {
            return Err(forum_config::ConfigError::auth(
                "auth.enabled requires jwt_secret or jwt_public_key_path",
            )
            .into());
        }
    };

    Ok(Some(Arc::new(validator)))
}
