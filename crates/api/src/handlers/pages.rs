//! Page composition endpoint: per-page SEO metadata plus the data the
//! external template renderer needs.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use vitrine_core::pages::{page_meta, PageId};
use vitrine_db::models::blog_post::BlogPostExcerpt;
use vitrine_db::repositories::{BlogRepo, FeedbackRepo, PortfolioRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Feedback entries shown on the home page.
const HOME_FEEDBACK_LIMIT: i64 = 5;

/// Blog excerpts shown on the home page.
const HOME_POST_LIMIT: i64 = 3;

/// Characters kept in a home-page blog excerpt.
const EXCERPT_CHARS: usize = 200;

/// GET /api/pages/{page}
///
/// Rendering context for one of the fixed site pages: SEO metadata plus the
/// entity data that page displays. Unknown page identifiers are rejected.
pub async fn get_page(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> AppResult<impl IntoResponse> {
    let page = PageId::from_segment(&segment)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown page '{segment}'")))?;

    let meta = page_meta(page);
    let data = match page {
        PageId::Home => {
            let feedback = FeedbackRepo::list(&state.pool, Some(HOME_FEEDBACK_LIMIT)).await?;
            let posts = BlogRepo::list(&state.pool, Some(HOME_POST_LIMIT)).await?;
            let excerpts: Vec<BlogPostExcerpt> = posts
                .into_iter()
                .map(|p| BlogPostExcerpt::from_post(p, EXCERPT_CHARS))
                .collect();
            json!({
                "recent_feedback": feedback,
                "recent_posts": excerpts,
                "portfolio_count": PortfolioRepo::count(&state.pool).await?,
            })
        }
        PageId::Portfolio => {
            let items = PortfolioRepo::list(&state.pool, None).await?;
            json!({ "items": items })
        }
        PageId::Feedback => {
            let entries = FeedbackRepo::list(&state.pool, None).await?;
            json!({ "entries": entries })
        }
        PageId::Blog => {
            let posts = BlogRepo::list(&state.pool, None).await?;
            let excerpts: Vec<BlogPostExcerpt> = posts
                .into_iter()
                .map(|p| BlogPostExcerpt::from_post(p, EXCERPT_CHARS))
                .collect();
            json!({ "posts": excerpts })
        }
        // Static pages: metadata only.
        PageId::Services | PageId::Contact => json!({}),
    };

    Ok(Json(json!({ "meta": meta, "data": data })))
}
