//! FitCoach Backend
//!
//! HTTP API for the FitCoach mobile client: onboarding, weekly workout
//! and meal planning, AI-generated plans with static fallbacks, progress
//! tracking and reminders.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! - Routes: HTTP request handling and routing
//! - Services: Business logic, planner sessions and the application context
//! - Gateway: OpenAI-compatible model client
//! - Store: Redis or in-memory key-value persistence

use anyhow::Result;
use fitcoach_backend::{
    config::{self, StoreBackend},
    gateway::{CoachingModel, DisabledModel, OpenAiClient},
    routes,
    state::AppState,
    store::{MemoryStore, PreferenceStore, RedisStore},
};
use redis::aio::ConnectionManager;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        "Starting FitCoach Backend"
    );

    if config::AppConfig::is_production() {
        validate_production_config(&config)?;
    }

    let store = create_store(&config).await;
    let model = create_model(&config)?;

    let state = AppState::new(config.clone(), store, model).await;
    let app = routes::create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Pick the configured store, falling back to memory if Redis is unreachable
async fn create_store(config: &config::AppConfig) -> PreferenceStore {
    match config.store.backend {
        StoreBackend::Memory => {
            info!("Using in-memory store");
            PreferenceStore::new(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Redis => match connect_redis(&config.redis.url).await {
            Some(conn) => PreferenceStore::new(Arc::new(RedisStore::new(
                conn,
                config.store.key_prefix.clone(),
            ))),
            None => {
                warn!("Falling back to in-memory store; data will not survive a restart");
                PreferenceStore::new(Arc::new(MemoryStore::new()))
            }
        },
    }
}

/// Connect to Redis with graceful fallback
///
/// Returns None if Redis is unavailable
async fn connect_redis(url: &str) -> Option<ConnectionManager> {
    info!("Connecting to Redis...");

    match redis::Client::open(url) {
        Ok(client) => match ConnectionManager::new(client).await {
            Ok(conn) => {
                info!("Redis connection established");
                Some(conn)
            }
            Err(e) => {
                warn!("Failed to connect to Redis: {}", e);
                None
            }
        },
        Err(e) => {
            warn!("Invalid Redis URL: {}", e);
            None
        }
    }
}

fn create_model(config: &config::AppConfig) -> Result<Arc<dyn CoachingModel>> {
    if !config.ai.enabled {
        info!("AI gateway disabled; built-in plans will be served");
        return Ok(Arc::new(DisabledModel));
    }

    let client = OpenAiClient::new(&config.ai)?;
    info!(
        base_url = %config.ai.base_url,
        chat_model = %config.ai.chat_model,
        "AI gateway enabled"
    );
    Ok(Arc::new(client))
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "fitcoach_backend=info,tower_http=info".into()
        } else {
            "fitcoach_backend=debug,tower_http=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Validate configuration for production deployment
fn validate_production_config(config: &config::AppConfig) -> Result<()> {
    let mut errors = Vec::new();

    if config.ai.enabled && config.ai.api_key.trim().is_empty() {
        errors.push("AI gateway is enabled but no API key is configured");
    }

    if config.store.backend == StoreBackend::Memory {
        warn!("Using the in-memory store in production - data is lost on restart");
    }

    if config.redis.url.contains("localhost") || config.redis.url.contains("127.0.0.1") {
        warn!("Redis URL contains localhost - ensure this is intentional for production");
    }

    if !errors.is_empty() {
        for err in &errors {
            error!("Configuration error: {}", err);
        }
        anyhow::bail!("Invalid production configuration");
    }

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
