//! HTTP middleware.

/// Static bearer-token gate
pub mod auth;
