//! Session Key Service - Main Application Entry Point
//!
//! REST API server for managing session key records and exchanging a stored
//! key with an external API for a login URL.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: SQLite with sqlx (async queries)
//! - **Authentication**: optional static bearer-token gate
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations (when AUTO_MIGRATE is set)
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use sessionkey_service::{
    AppState, build_router, config::Config, db, middleware::auth::AuthConfig,
    services::store::SqliteStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_path).await?;
    tracing::info!("Database pool created at {}", config.database_path);

    // Run migrations when enabled
    if config.auto_migrate {
        db::run_migrations(&pool).await?;
        tracing::info!("Database migrations complete");
    }

    let state = AppState {
        store: Arc::new(SqliteStore::new(pool)),
        http: reqwest::Client::new(),
    };

    let auth = AuthConfig {
        enabled: config.auth_enabled,
        token: config.auth_token.clone(),
    };
    if auth.enabled {
        tracing::info!("Bearer-token gate enabled");
    }

    let app = build_router(state, auth);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    axum::serve(listener, app).await?;

    Ok(())
}
