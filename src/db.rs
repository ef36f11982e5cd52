//! Database connection pool and migration management.

use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

/// Type alias for the SQLite connection pool.
pub type DbPool = Pool<Sqlite>;

/// Create a new SQLite connection pool.
///
/// The database file is created if it does not exist yet.
///
/// # Arguments
///
/// * `database_path` - Filesystem path of the SQLite database file
pub async fn create_pool(database_path: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true);

    SqlitePoolOptions::new()
        // Limit concurrent connections
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Run database migrations from the `migrations/` directory.
///
/// Migrations are tracked in the `_sqlx_migrations` table, so each file runs
/// only once. Invoked at startup when `AUTO_MIGRATE` is enabled.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // The macro reads migrations at compile time from ./migrations
    sqlx::migrate!("./migrations").run(pool).await
}
