//! Route definitions for the feedback resource, registered under `/feedback`.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// ```text
/// GET    /             list (public, ?limit)
/// POST   /             submit (public)
/// DELETE /{id}         delete (admin)
/// PUT    /{id}/reply   set reply (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(feedback::list).post(feedback::submit))
        .route("/{id}", delete(feedback::delete))
        .route("/{id}/reply", put(feedback::reply))
}
