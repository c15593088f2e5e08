//! Repository for the `feedback_entries` table.

use sqlx::PgPool;
use vitrine_core::types::DbId;

use crate::models::feedback::{CreateFeedback, FeedbackEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, message, rating, reply, submitted_at";

/// Provides CRUD operations for feedback entries.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Insert a new feedback entry, returning the created row with its
    /// server-assigned id and timestamp.
    pub async fn create(pool: &PgPool, input: &CreateFeedback) -> Result<FeedbackEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback_entries (name, email, phone, message, rating)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FeedbackEntry>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.message)
            .bind(input.rating)
            .fetch_one(pool)
            .await
    }

    /// List feedback newest-first, optionally limited.
    ///
    /// A `NULL` limit means all rows (`LIMIT NULL` is a no-op in Postgres).
    pub async fn list(pool: &PgPool, limit: Option<i64>) -> Result<Vec<FeedbackEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM feedback_entries
             ORDER BY submitted_at DESC, id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, FeedbackEntry>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Set the admin reply on an entry, returning the updated row.
    pub async fn set_reply(
        pool: &PgPool,
        id: DbId,
        reply: &str,
    ) -> Result<Option<FeedbackEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE feedback_entries SET reply = $1 WHERE id = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FeedbackEntry>(&query)
            .bind(reply)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM feedback_entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all entries.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM feedback_entries")
            .fetch_one(pool)
            .await
    }
}
