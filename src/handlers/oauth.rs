//! Token-exchange HTTP handler.

use crate::{
    AppState,
    error::{AppError, AppJson},
    models::oauth::{LoginUrlResponse, OAuthTokenRequest},
    services::oauth_service,
};
use axum::{Json, extract::State};

/// Exchange a stored session key for a login URL.
///
/// # Endpoint
///
/// `POST /api/v1/auth/oauth_token`
///
/// # Request Body
///
/// ```json
/// {
///   "session_key_id": 1,
///   "base_url": "https://partner.example.com",
///   "unique_name": "kiosk-3"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{"login_url": "<absolute URL>"}`
/// - **Error (400)**: malformed body
/// - **Error (404)**: no session key with that id
/// - **Error (500)**: external call or response parsing failed
pub async fn oauth_token(
    State(state): State<AppState>,
    AppJson(request): AppJson<OAuthTokenRequest>,
) -> Result<Json<LoginUrlResponse>, AppError> {
    let login_url = oauth_service::exchange(state.store.as_ref(), &state.http, request).await?;

    Ok(Json(LoginUrlResponse { login_url }))
}
