//! Data models and API request/response types.

/// Token-exchange request/response types
pub mod oauth;
/// Session key entity and CRUD DTOs
pub mod session_key;
