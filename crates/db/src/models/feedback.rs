//! Feedback entry model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use vitrine_core::types::{DbId, Timestamp};

/// A feedback row from the `feedback_entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeedbackEntry {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub rating: i32,
    /// Admin reply, if one has been posted.
    pub reply: Option<String>,
    pub submitted_at: Timestamp,
}

/// DTO for inserting a new feedback entry. Values are already validated and
/// normalized by `vitrine_core::feedback`.
#[derive(Debug)]
pub struct CreateFeedback {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub rating: i32,
}
