//! Session key service library.
//!
//! HTTP service for managing session key records and exchanging a stored key
//! with an external API for a login URL. The router is built here so the
//! binary and the integration tests share one construction path.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod obfuscate;
pub mod services;

use std::sync::Arc;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::middleware::auth::AuthConfig;
use crate::services::store::SessionKeyStore;

/// Shared application state injected into handlers.
///
/// Handlers see the storage port as a trait object, never a concrete
/// database handle.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SessionKeyStore>,
    pub http: reqwest::Client,
}

/// Build the application router.
///
/// The bearer-token gate covers the API surface and the static assets;
/// `/health` stays public. The gate middleware is always installed and
/// passes everything through when disabled.
pub fn build_router(state: AppState, auth: AuthConfig) -> Router {
    let gated = Router::new()
        .route(
            "/api/v1/sessionkeys",
            post(handlers::session_keys::create_session_key)
                .get(handlers::session_keys::list_session_keys),
        )
        .route(
            "/api/v1/sessionkeys/{id}",
            get(handlers::session_keys::get_session_key)
                .put(handlers::session_keys::update_session_key)
                .delete(handlers::session_keys::delete_session_key),
        )
        .route("/api/v1/auth/oauth_token", post(handlers::oauth::oauth_token))
        // Static web UI assets, served from ./web
        .fallback_service(ServeDir::new("web"))
        .layer(axum_middleware::from_fn_with_state(
            auth,
            middleware::auth::auth_middleware,
        ))
        .with_state(state);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(gated)
        // Distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
