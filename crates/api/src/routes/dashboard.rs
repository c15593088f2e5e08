//! Route definitions for the admin panel, registered under `/admin`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{dashboard, newsletter};
use crate::state::AppState;

/// ```text
/// GET /dashboard     entity counts + recent feedback (admin)
/// GET /subscribers   full newsletter subscriber list (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::dashboard))
        .route("/subscribers", get(newsletter::list_subscribers))
}
