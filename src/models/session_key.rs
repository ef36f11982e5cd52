//! Session key data model and API request/response types.
//!
//! This module defines:
//! - `SessionKey`: database entity for one stored credential
//! - `CreateSessionKeyRequest` / `SessionKeyPatch`: request bodies
//! - `SessionKeyResponse`: response body returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::obfuscate;

/// Represents a session key record from the database.
///
/// Maps to the `session_keys` table. Both `key` (the credential value) and
/// `code` (a human-facing identifier) are globally unique across all records,
/// enforced by UNIQUE constraints in the schema.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct SessionKey {
    /// Unique identifier, assigned by the database
    pub id: i64,

    /// The credential value. Stored raw; obfuscated only on the way out.
    pub key: String,

    /// Human-facing identifier, distinct from `key`
    pub code: String,

    /// Whether this session key is currently active
    pub status: bool,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last update
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a session key.
///
/// All three fields are required.
///
/// ```json
/// {
///   "key": "sk-live-9f8e7d6c",
///   "code": "store-12",
///   "status": true
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateSessionKeyRequest {
    pub key: String,
    pub code: String,
    pub status: bool,
}

/// Partial update for a session key.
///
/// Any subset of the fields may be present; a field that is omitted from the
/// request body leaves the stored value unchanged. An empty-string `key` or
/// `code` is treated the same as an omitted one, but `status: false` is a
/// real update — for `status`, only literal omission counts as "unchanged".
#[derive(Debug, Default, Deserialize)]
pub struct SessionKeyPatch {
    pub key: Option<String>,
    pub code: Option<String>,
    pub status: Option<bool>,
}

/// Response body for session key endpoints.
#[derive(Debug, Serialize)]
pub struct SessionKeyResponse {
    pub id: i64,
    pub key: String,
    pub code: String,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionKeyResponse {
    /// Build a response with the `key` field obfuscated.
    ///
    /// Used by the create/list/get endpoints. `code` is never obfuscated.
    pub fn obfuscated(record: SessionKey) -> Self {
        let mut response = Self::from(record);
        response.key = obfuscate::encode(&response.key);
        response
    }
}

/// Raw conversion, `key` untouched.
///
/// The update endpoint responds with the raw key value, unlike create/list/
/// get. That asymmetry is inherited behavior and is asserted by the
/// integration tests rather than papered over here.
impl From<SessionKey> for SessionKeyResponse {
    fn from(record: SessionKey) -> Self {
        Self {
            id: record.id,
            key: record.key,
            code: record.code,
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
