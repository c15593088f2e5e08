//! Route definitions for the blog resource, registered under `/blog`.

use axum::routing::get;
use axum::Router;

use crate::handlers::blog;
use crate::state::AppState;

/// ```text
/// GET    /         list excerpts (public, ?limit)
/// POST   /         create (admin)
/// GET    /{slug}   detail by slug (public; unknown slug -> 303 to /)
/// DELETE /{id}     delete by numeric id (admin)
/// ```
pub fn router() -> Router<AppState> {
    // Both verbs share one registration (axum rejects two param names at the
    // same position). GET parses the segment as a slug, DELETE as a numeric
    // id; a non-numeric DELETE segment fails path deserialization with 400.
    Router::new()
        .route("/", get(blog::list).post(blog::create))
        .route("/{slug}", get(blog::get_by_slug).delete(blog::delete))
}
