//! Business logic services.

/// Token exchange against the external API
pub mod oauth_service;
/// Storage port and SQLite adapter
pub mod store;
