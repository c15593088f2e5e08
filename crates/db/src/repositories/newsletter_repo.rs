//! Repository for the `newsletter_subscriptions` table.

use sqlx::PgPool;

use crate::models::newsletter::NewsletterSubscription;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, subscribed_at";

/// Outcome of a subscribe attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// A new subscription row was created.
    Subscribed,
    /// The email was already subscribed; nothing was written.
    AlreadySubscribed,
}

/// Provides operations for newsletter subscriptions.
pub struct NewsletterRepo;

impl NewsletterRepo {
    /// Subscribe an email. The unique constraint on `email` is absorbed with
    /// `ON CONFLICT DO NOTHING`, so a duplicate is a soft outcome rather
    /// than an error.
    pub async fn subscribe(pool: &PgPool, email: &str) -> Result<SubscribeOutcome, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO newsletter_subscriptions (email)
             VALUES ($1)
             ON CONFLICT (email) DO NOTHING",
        )
        .bind(email)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            Ok(SubscribeOutcome::Subscribed)
        } else {
            Ok(SubscribeOutcome::AlreadySubscribed)
        }
    }

    /// List all subscriptions, oldest-first.
    pub async fn list(pool: &PgPool) -> Result<Vec<NewsletterSubscription>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM newsletter_subscriptions ORDER BY id");
        sqlx::query_as::<_, NewsletterSubscription>(&query)
            .fetch_all(pool)
            .await
    }

    /// Count all subscriptions.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM newsletter_subscriptions")
            .fetch_one(pool)
            .await
    }
}
