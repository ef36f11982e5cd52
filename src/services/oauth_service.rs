//! Token exchange against the external management API.
//!
//! Takes a stored session key, POSTs its raw value to the external API, and
//! rewrites the relative login URL in the reply into an absolute one. No
//! retry and no timeout beyond the transport default.

use crate::{
    error::AppError,
    models::oauth::{OAuthExchangeBody, OAuthExchangeResponse, OAuthTokenRequest},
    services::store::SessionKeyStore,
};

/// Exchange a stored session key for an absolute login URL.
///
/// # Process
///
/// 1. Load the record by id (404 when absent)
/// 2. POST `{"session_key": <raw key>, "unique_name"?}` as JSON to
///    `{base_url}/manage-api/auth/oauth_token`
/// 3. Parse `{"login_url", "oauth_token"}` from the reply
/// 4. Return `base_url + login_url`; the oauth token is not surfaced
///
/// Each failure mode maps to its own error: connect/send failure, unreadable
/// body, and undecodable body are reported distinctly, all as HTTP 500.
pub async fn exchange(
    store: &dyn SessionKeyStore,
    client: &reqwest::Client,
    request: OAuthTokenRequest,
) -> Result<String, AppError> {
    let record = store.get(request.session_key_id).await?;

    // An empty unique_name is treated the same as an absent one.
    let body = OAuthExchangeBody {
        session_key: &record.key,
        unique_name: request
            .unique_name
            .as_deref()
            .filter(|name| !name.is_empty()),
    };

    let url = format!("{}/manage-api/auth/oauth_token", request.base_url);
    let response = client
        .post(&url)
        .json(&body)
        .send()
        .await
        .map_err(AppError::UpstreamConnect)?;

    let text = response.text().await.map_err(AppError::UpstreamBody)?;

    let parsed: OAuthExchangeResponse =
        serde_json::from_str(&text).map_err(AppError::UpstreamDecode)?;

    Ok(format!("{}{}", request.base_url, parsed.login_url))
}
