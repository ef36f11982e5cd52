//! Application configuration management.
//!
//! Configuration is loaded from environment variables once at startup via
//! the `envy` crate and passed by value into the components that need it.
//! There is no package-level mutable configuration state.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_PATH` (optional): SQLite database file, defaults to `sessionkeys.db`
/// - `AUTO_MIGRATE` (optional): run migrations at startup, defaults to false
/// - `AUTH_ENABLED` (optional): enable the bearer-token gate, defaults to false
/// - `AUTH_TOKEN` (optional): expected bearer token when the gate is enabled
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 8080
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_database_path")]
    pub database_path: String,

    #[serde(default)]
    pub auto_migrate: bool,

    #[serde(default)]
    pub auth_enabled: bool,

    #[serde(default)]
    pub auth_token: String,

    #[serde(default = "default_port")]
    pub server_port: u16,
}

fn default_database_path() -> String {
    "sessionkeys.db".to_string()
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    8080
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Attempts to load a `.env` file first (optional), then deserializes
    /// the environment into a `Config`. Field names map to upper-cased
    /// variables: `database_path` -> `DATABASE_PATH`.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>()
    }
}
