//! Repository for the `portfolio_items` table.

use sqlx::PgPool;
use vitrine_core::types::DbId;

use crate::models::portfolio::{CreatePortfolioItem, PortfolioItem, UpdatePortfolioItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, file_name, media_type, category, created_at";

/// Provides CRUD operations for portfolio items.
pub struct PortfolioRepo;

impl PortfolioRepo {
    /// Insert a new portfolio item, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePortfolioItem,
    ) -> Result<PortfolioItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO portfolio_items (title, description, file_name, media_type, category)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.file_name)
            .bind(&input.media_type)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// Find a portfolio item by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PortfolioItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolio_items WHERE id = $1");
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List items newest-first, optionally filtered by category.
    pub async fn list(
        pool: &PgPool,
        category: Option<&str>,
    ) -> Result<Vec<PortfolioItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM portfolio_items
             WHERE ($1::TEXT IS NULL OR category = $1)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Partially update an item, returning the updated row. `None` fields
    /// keep their current value.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePortfolioItem,
    ) -> Result<Option<PortfolioItem>, sqlx::Error> {
        let query = format!(
            "UPDATE portfolio_items SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                category = COALESCE($3, category),
                file_name = COALESCE($4, file_name),
                media_type = COALESCE($5, media_type)
             WHERE id = $6
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.file_name)
            .bind(&input.media_type)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM portfolio_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all items.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM portfolio_items")
            .fetch_one(pool)
            .await
    }
}
