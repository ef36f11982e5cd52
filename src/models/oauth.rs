//! Request/response types for the token-exchange endpoint and its upstream.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/v1/auth/oauth_token`.
///
/// ```json
/// {
///   "session_key_id": 1,
///   "base_url": "https://partner.example.com",
///   "unique_name": "kiosk-3"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct OAuthTokenRequest {
    /// Id of the stored session key whose raw value is sent upstream
    pub session_key_id: i64,

    /// Base URL of the external API; also used to absolutize the login URL
    pub base_url: String,

    /// Optional name forwarded to the external API
    pub unique_name: Option<String>,
}

/// Body POSTed to `{base_url}/manage-api/auth/oauth_token`.
///
/// Carries the raw (non-obfuscated) key value. `unique_name` is omitted from
/// the JSON entirely when not provided.
#[derive(Debug, Serialize)]
pub struct OAuthExchangeBody<'a> {
    pub session_key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<&'a str>,
}

/// Response body expected from the external API.
#[derive(Debug, Deserialize)]
pub struct OAuthExchangeResponse {
    /// Relative login path, joined onto `base_url` for the caller
    pub login_url: String,

    /// Present in the upstream response but never surfaced to the caller.
    #[serde(default)]
    #[allow(dead_code)]
    pub oauth_token: String,
}

/// Response body returned to the caller of the token-exchange endpoint.
#[derive(Debug, Serialize)]
pub struct LoginUrlResponse {
    pub login_url: String,
}
