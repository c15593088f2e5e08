//! Portfolio item model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use vitrine_core::types::{DbId, Timestamp};

/// A portfolio row from the `portfolio_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PortfolioItem {
    pub id: DbId,
    pub title: String,
    pub description: String,
    /// Stored filename under the media root, or `None` for items without an
    /// uploaded file.
    pub file_name: Option<String>,
    /// `"image"` or `"video"`, derived from the accepted upload extension.
    pub media_type: String,
    pub category: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a new portfolio item.
#[derive(Debug)]
pub struct CreatePortfolioItem {
    pub title: String,
    pub description: String,
    pub file_name: Option<String>,
    pub media_type: String,
    pub category: String,
}

/// DTO for a partial portfolio update. `None` fields keep their current
/// value; `file_name`/`media_type` are set together when a new file replaces
/// the old one.
#[derive(Debug, Default)]
pub struct UpdatePortfolioItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub file_name: Option<String>,
    pub media_type: Option<String>,
}
