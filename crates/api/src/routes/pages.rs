//! Route definitions for page composition, registered under `/pages`.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// ```text
/// GET /{page}   rendering context (meta + data) for a fixed site page
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{page}", get(pages::get_page))
}
