//! Handlers for the `/blog` resource.
//!
//! Slugs are derived from titles; duplicate titles get a numeric suffix
//! (`hello-world`, `hello-world-2`, ...). An unknown slug redirects to the
//! home page rather than returning a 404, matching the public site's
//! behaviour.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use vitrine_core::error::CoreError;
use vitrine_core::pages::{detail_meta, PageId};
use vitrine_core::slug::{next_free_slug, slugify};
use vitrine_core::types::DbId;
use vitrine_db::models::blog_post::{BlogPostExcerpt, CreateBlogPost};
use vitrine_db::repositories::BlogRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// Characters kept in a listing excerpt.
const EXCERPT_CHARS: usize = 200;

/// Request body for `POST /api/blog`.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Query parameters for the blog listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
}

/// POST /api/blog
///
/// Create a post. Admin only. The slug is generated server-side from the
/// title, with a numeric suffix on collision.
pub async fn create(
    _admin: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreatePostRequest>,
) -> AppResult<impl IntoResponse> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title is required".into(),
        )));
    }
    if input.content.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Content is required".into(),
        )));
    }

    let base = slugify(title);
    if base.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title must contain at least one alphanumeric character".into(),
        )));
    }

    let taken = BlogRepo::slugs_with_base(&state.pool, &base).await?;
    let slug = next_free_slug(&base, &taken);

    let post = BlogRepo::create(
        &state.pool,
        &CreateBlogPost {
            title: title.to_string(),
            content: input.content,
        },
        &slug,
    )
    .await?;

    tracing::info!(post_id = post.id, slug = %post.slug, "Blog post created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// GET /api/blog
///
/// Public listing, newest-first, optionally limited, with truncated
/// excerpts.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    if params.limit.is_some_and(|l| l < 0) {
        return Err(AppError::Core(CoreError::Validation(
            "limit must not be negative".into(),
        )));
    }
    let posts = BlogRepo::list(&state.pool, params.limit).await?;
    let excerpts: Vec<BlogPostExcerpt> = posts
        .into_iter()
        .map(|post| BlogPostExcerpt::from_post(post, EXCERPT_CHARS))
        .collect();
    Ok(Json(DataResponse { data: excerpts }))
}

/// GET /api/blog/{slug}
///
/// Public detail view. An unknown slug redirects to the home page. The
/// response carries the composed SEO metadata for the detail page.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let post = BlogRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Redirect("/"))?;

    let meta = detail_meta(PageId::Blog, &post.title);

    Ok(Json(serde_json::json!({
        "meta": meta,
        "data": post,
    })))
}

/// DELETE /api/blog/{id}
///
/// Remove a post by id. Admin only.
pub async fn delete(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !BlogRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id,
        }));
    }

    tracing::info!(post_id = id, "Blog post deleted");

    Ok(StatusCode::NO_CONTENT)
}
