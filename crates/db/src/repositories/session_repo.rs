//! Repository for the `admin_sessions` table.

use sqlx::PgPool;
use vitrine_core::types::DbId;

use crate::models::session::{AdminSessionRow, CreateSession};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, token_hash, expires_at, is_revoked, created_at";

/// Provides CRUD operations for admin sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<AdminSessionRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_sessions (token_hash, expires_at)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminSessionRow>(&query)
            .bind(&input.token_hash)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find an active session by its token hash.
    ///
    /// Only returns sessions that are not revoked and not expired.
    pub async fn find_active_by_token_hash(
        pool: &PgPool,
        hash: &str,
    ) -> Result<Option<AdminSessionRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM admin_sessions
             WHERE token_hash = $1
               AND is_revoked = FALSE
               AND expires_at > NOW()"
        );
        sqlx::query_as::<_, AdminSessionRow>(&query)
            .bind(hash)
            .fetch_optional(pool)
            .await
    }

    /// Revoke a single session. Returns `true` if the row was updated.
    pub async fn revoke(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE admin_sessions SET is_revoked = TRUE WHERE id = $1 AND is_revoked = FALSE",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete expired or revoked sessions. Returns the count of deleted rows.
    pub async fn cleanup_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM admin_sessions WHERE expires_at < NOW() OR is_revoked = TRUE")
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }
}
