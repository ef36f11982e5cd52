//! Session key management HTTP handlers.
//!
//! This module implements the session-key API endpoints:
//! - POST /api/v1/sessionkeys - Create a new session key
//! - GET /api/v1/sessionkeys - List all session keys
//! - GET /api/v1/sessionkeys/:id - Get a session key by id
//! - PUT /api/v1/sessionkeys/:id - Partially update a session key
//! - DELETE /api/v1/sessionkeys/:id - Delete a session key

use crate::{
    AppState,
    error::{AppError, AppJson},
    models::session_key::{CreateSessionKeyRequest, SessionKeyPatch, SessionKeyResponse},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;

/// Create a new session key.
///
/// # Endpoint
///
/// `POST /api/v1/sessionkeys`
///
/// # Request Body
///
/// ```json
/// {
///   "key": "sk-live-9f8e7d6c",
///   "code": "store-12",
///   "status": true
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: the created record, `key` obfuscated
/// - **Error (400)**: missing/empty/malformed fields, duplicate key,
///   duplicate code
/// - **Error (500)**: storage failure
pub async fn create_session_key(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateSessionKeyRequest>,
) -> Result<(StatusCode, Json<SessionKeyResponse>), AppError> {
    // Empty strings fail the required-field validation, same as omission.
    if request.key.is_empty() || request.code.is_empty() {
        return Err(AppError::InvalidInput(
            "key and code must be non-empty".to_string(),
        ));
    }

    let record = state
        .store
        .create(&request.key, &request.code, request.status)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SessionKeyResponse::obfuscated(record)),
    ))
}

/// List all session keys.
///
/// # Endpoint
///
/// `GET /api/v1/sessionkeys`
///
/// Returns every stored record with its `key` obfuscated. No pagination.
pub async fn list_session_keys(
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionKeyResponse>>, AppError> {
    let records = state.store.list().await?;

    let responses = records
        .into_iter()
        .map(SessionKeyResponse::obfuscated)
        .collect();

    Ok(Json(responses))
}

/// Get a single session key by id.
///
/// # Endpoint
///
/// `GET /api/v1/sessionkeys/{id}`
///
/// # Response
///
/// - **Success (200 OK)**: the record, `key` obfuscated
/// - **Error (404)**: no record with that id
pub async fn get_session_key(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SessionKeyResponse>, AppError> {
    let record = state.store.get(id).await?;

    Ok(Json(SessionKeyResponse::obfuscated(record)))
}

/// Partially update a session key.
///
/// # Endpoint
///
/// `PUT /api/v1/sessionkeys/{id}`
///
/// Any subset of `key`, `code`, `status` may be supplied; omitted fields are
/// left unchanged. Uniqueness of a changed `key`/`code` is re-checked
/// excluding this record.
///
/// # Response
///
/// - **Success (200 OK)**: the updated record. Unlike the other read paths,
///   the `key` in this response is the raw stored value.
/// - **Error (400)**: malformed body, duplicate key, duplicate code
/// - **Error (404)**: no record with that id
pub async fn update_session_key(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(patch): AppJson<SessionKeyPatch>,
) -> Result<Json<SessionKeyResponse>, AppError> {
    let record = state.store.update(id, patch).await?;

    Ok(Json(SessionKeyResponse::from(record)))
}

/// Delete a session key.
///
/// # Endpoint
///
/// `DELETE /api/v1/sessionkeys/{id}`
///
/// # Response
///
/// - **Success (200 OK)**: `{"message": "Session key deleted"}`
/// - **Error (404)**: no record with that id (including a repeat delete)
pub async fn delete_session_key(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.store.delete(id).await?;

    Ok(Json(json!({ "message": "Session key deleted" })))
}
