//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Calls into the storage port and/or services
//! 3. Returns an HTTP response (JSON, status code)

/// Health check endpoint
pub mod health;
/// Token-exchange endpoint
pub mod oauth;
/// Session key CRUD endpoints
pub mod session_keys;
