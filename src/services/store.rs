//! Storage port for session key records and its SQLite adapter.
//!
//! Handlers depend on the [`SessionKeyStore`] trait rather than a concrete
//! database handle, so tests can substitute a different backing store and the
//! persistence layer stays swappable.
//!
//! Uniqueness of `key` and `code` is checked twice: an explicit existence
//! query first (for a precise error), and the schema's UNIQUE constraints as
//! the backstop. The pre-check and the write are not in one transaction, so
//! two concurrent creates can both pass the check; the constraint violation
//! from the losing insert is mapped back to the same duplicate error.

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    db::DbPool,
    error::AppError,
    models::session_key::{SessionKey, SessionKeyPatch},
};

/// Capability set required of a session key store.
#[async_trait]
pub trait SessionKeyStore: Send + Sync {
    /// Insert a new record. Fails with `DuplicateKey` / `DuplicateCode` when
    /// the key or code is already taken (key checked first).
    async fn create(&self, key: &str, code: &str, status: bool) -> Result<SessionKey, AppError>;

    /// All records, unpaginated.
    async fn list(&self) -> Result<Vec<SessionKey>, AppError>;

    /// Single record by id, `SessionKeyNotFound` when absent.
    async fn get(&self, id: i64) -> Result<SessionKey, AppError>;

    /// Apply a partial update. Only fields present in the patch change;
    /// uniqueness is re-checked excluding this record's own id.
    async fn update(&self, id: i64, patch: SessionKeyPatch) -> Result<SessionKey, AppError>;

    /// Remove a record, `SessionKeyNotFound` when no row was deleted.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

/// SQLite-backed store.
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Does any record (other than `exclude_id`, when given) hold this key?
    async fn key_exists(&self, key: &str, exclude_id: Option<i64>) -> Result<bool, AppError> {
        let row: Option<(i64,)> = sqlx::query_as(
            r#"SELECT id FROM session_keys WHERE "key" = $1 AND ($2 IS NULL OR id <> $2)"#,
        )
        .bind(key)
        .bind(exclude_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.is_some())
    }

    async fn code_exists(&self, code: &str, exclude_id: Option<i64>) -> Result<bool, AppError> {
        let row: Option<(i64,)> = sqlx::query_as(
            "SELECT id FROM session_keys WHERE code = $1 AND ($2 IS NULL OR id <> $2)",
        )
        .bind(code)
        .bind(exclude_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.is_some())
    }
}

#[async_trait]
impl SessionKeyStore for SqliteStore {
    async fn create(&self, key: &str, code: &str, status: bool) -> Result<SessionKey, AppError> {
        if self.key_exists(key, None).await? {
            return Err(AppError::DuplicateKey);
        }
        if self.code_exists(code, None).await? {
            return Err(AppError::DuplicateCode);
        }

        let now = Utc::now();
        let record = sqlx::query_as::<_, SessionKey>(
            r#"
            INSERT INTO session_keys ("key", code, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, "key", code, status, created_at, updated_at
            "#,
        )
        .bind(key)
        .bind(code)
        .bind(status)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(record)
    }

    async fn list(&self) -> Result<Vec<SessionKey>, AppError> {
        let records = sqlx::query_as::<_, SessionKey>(
            r#"SELECT id, "key", code, status, created_at, updated_at FROM session_keys"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    async fn get(&self, id: i64) -> Result<SessionKey, AppError> {
        let record = sqlx::query_as::<_, SessionKey>(
            r#"
            SELECT id, "key", code, status, created_at, updated_at
            FROM session_keys
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::SessionKeyNotFound)?;

        Ok(record)
    }

    async fn update(&self, id: i64, patch: SessionKeyPatch) -> Result<SessionKey, AppError> {
        let mut record = self.get(id).await?;

        // An empty string counts as "not supplied", same as omitting the
        // field. Setting a field to its current value is a no-op, not a
        // duplicate.
        if let Some(key) = patch.key.filter(|key| !key.is_empty()) {
            if key != record.key {
                if self.key_exists(&key, Some(id)).await? {
                    return Err(AppError::DuplicateKey);
                }
                record.key = key;
            }
        }

        if let Some(code) = patch.code.filter(|code| !code.is_empty()) {
            if code != record.code {
                if self.code_exists(&code, Some(id)).await? {
                    return Err(AppError::DuplicateCode);
                }
                record.code = code;
            }
        }

        if let Some(status) = patch.status {
            record.status = status;
        }

        record.updated_at = Utc::now();

        let updated = sqlx::query_as::<_, SessionKey>(
            r#"
            UPDATE session_keys
            SET "key" = $1, code = $2, status = $3, updated_at = $4
            WHERE id = $5
            RETURNING id, "key", code, status, created_at, updated_at
            "#,
        )
        .bind(&record.key)
        .bind(&record.code)
        .bind(record.status)
        .bind(record.updated_at)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM session_keys WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::SessionKeyNotFound);
        }

        Ok(())
    }
}

/// Map a UNIQUE-constraint violation from SQLite back to the matching
/// duplicate error, so a create/update that loses a race with a concurrent
/// writer reports the same 400 as one caught by the pre-check.
fn map_unique_violation(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            // SQLite reports e.g. "UNIQUE constraint failed: session_keys.key"
            let message = db_err.message();
            if message.contains("session_keys.key") {
                return AppError::DuplicateKey;
            }
            if message.contains("session_keys.code") {
                return AppError::DuplicateCode;
            }
        }
    }
    AppError::Database(err)
}
