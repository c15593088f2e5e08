//! Repository for the `blog_posts` table.

use sqlx::PgPool;
use vitrine_core::types::DbId;

use crate::models::blog_post::{BlogPost, CreateBlogPost};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, slug, created_at";

/// Provides CRUD operations for blog posts.
pub struct BlogRepo;

impl BlogRepo {
    /// Insert a new post with an already-resolved unique slug, returning the
    /// created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBlogPost,
        slug: &str,
    ) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_posts (title, content, slug)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    /// Find a post by exact slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE slug = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List posts newest-first, optionally limited.
    pub async fn list(pool: &PgPool, limit: Option<i64>) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts
             ORDER BY created_at DESC, id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List existing slugs equal to `base` or starting with `{base}-`.
    ///
    /// Supports numeric-suffix collision resolution: the caller picks the
    /// first free candidate among these.
    pub async fn slugs_with_base(pool: &PgPool, base: &str) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT slug FROM blog_posts WHERE slug = $1 OR slug LIKE $1 || '-%'",
        )
        .bind(base)
        .fetch_all(pool)
        .await
    }

    /// Delete a post by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all posts.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM blog_posts")
            .fetch_one(pool)
            .await
    }
}
