//! Admin dashboard handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use vitrine_db::repositories::{BlogRepo, FeedbackRepo, NewsletterRepo, PortfolioRepo};

use crate::error::AppResult;
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// Feedback entries shown on the dashboard.
const RECENT_FEEDBACK_LIMIT: i64 = 10;

/// GET /api/admin/dashboard
///
/// Entity counts and recent feedback for the admin panel. Admin only.
pub async fn dashboard(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let feedback_count = FeedbackRepo::count(&state.pool).await?;
    let portfolio_count = PortfolioRepo::count(&state.pool).await?;
    let subscriber_count = NewsletterRepo::count(&state.pool).await?;
    let post_count = BlogRepo::count(&state.pool).await?;
    let recent_feedback = FeedbackRepo::list(&state.pool, Some(RECENT_FEEDBACK_LIMIT)).await?;

    Ok(Json(DataResponse {
        data: json!({
            "counts": {
                "feedback": feedback_count,
                "portfolio": portfolio_count,
                "subscribers": subscriber_count,
                "posts": post_count,
            },
            "recent_feedback": recent_feedback,
        }),
    }))
}
