//! Newsletter subscription model.

use serde::Serialize;
use sqlx::FromRow;
use vitrine_core::types::{DbId, Timestamp};

/// A subscription row from the `newsletter_subscriptions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsletterSubscription {
    pub id: DbId,
    pub email: String,
    pub subscribed_at: Timestamp,
}
