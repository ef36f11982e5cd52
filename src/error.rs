//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses. Every error becomes a flat JSON envelope:
//!
//! ```json
//! {"error": "<message>"}
//! ```

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code. The three upstream
/// variants are kept distinct so a failed token exchange reports whether the
/// call never connected, the body could not be read, or the body was not the
/// expected JSON shape.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (connection error, query error).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request body is malformed or missing required fields.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Another record already holds the requested `key` value.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Key already exists")]
    DuplicateKey,

    /// Another record already holds the requested `code` value.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Code already exists")]
    DuplicateCode,

    /// No session key record with the requested id.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Session key not found")]
    SessionKeyNotFound,

    /// Bearer token missing, malformed, or mismatched.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Unauthorized")]
    Unauthorized,

    /// The token-exchange request never reached the external API.
    #[error("Failed to reach external API: {0}")]
    UpstreamConnect(reqwest::Error),

    /// The external API responded but its body could not be read.
    #[error("Failed to read external API response: {0}")]
    UpstreamBody(reqwest::Error),

    /// The external API body was not the expected JSON shape.
    #[error("Failed to parse external API response: {0}")]
    UpstreamDecode(serde_json::Error),
}

/// Convert AppError into an HTTP response.
///
/// Allows handlers to return `Result<T, AppError>` and have failures turned
/// into the JSON error envelope automatically.
///
/// # Status Code Mapping
///
/// - `InvalidInput`, `DuplicateKey`, `DuplicateCode` → 400 Bad Request
/// - `Unauthorized` → 401 Unauthorized
/// - `SessionKeyNotFound` → 404 Not Found
/// - `Database`, `Upstream*` → 500 Internal Server Error
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidInput(_) | AppError::DuplicateKey | AppError::DuplicateCode => {
                StatusCode::BAD_REQUEST
            }
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::SessionKeyNotFound => StatusCode::NOT_FOUND,
            AppError::Database(_)
            | AppError::UpstreamConnect(_)
            | AppError::UpstreamBody(_)
            | AppError::UpstreamDecode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Database errors are logged but not echoed to the client.
        let message = match self {
            AppError::Database(ref err) => {
                tracing::error!("Database error: {err}");
                "Internal storage error".to_string()
            }
            ref other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// JSON extractor whose rejection uses the application error envelope.
///
/// Axum's built-in `Json` rejection responds with plain text; wrapping it
/// here keeps malformed request bodies on the same `{"error": ...}` format
/// as every other failure.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::InvalidInput(rejection.body_text()))?;
        Ok(AppJson(value))
    }
}
