//! Bearer-token authentication middleware.
//!
//! A static gate in front of the whole routed surface: when enabled, every
//! request must carry `Authorization: Bearer <token>` with the exact
//! configured token. There is no per-request database lookup; both the flag
//! and the token are fixed at process start.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;

/// Auth gate settings, built once from [`crate::config::Config`] at startup.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub enabled: bool,
    pub token: String,
}

/// Bearer-token middleware.
///
/// # Flow
///
/// 1. Pass everything through unchecked when the gate is disabled
/// 2. Extract the `Authorization` header
/// 3. Require the literal `Bearer <token>` shape
/// 4. Compare against the configured token
///
/// Missing header, any other shape, or a mismatch all yield 401 before the
/// request reaches a handler.
pub async fn auth_middleware(
    State(auth): State<AuthConfig>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !auth.enabled {
        return Ok(next.run(request).await);
    }

    let header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?;

    if token != auth.token {
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
