//! Route definitions for the portfolio resource, registered under `/portfolio`.

use axum::routing::get;
use axum::Router;

use crate::handlers::portfolio;
use crate::state::AppState;

/// ```text
/// GET    /       list (public, ?category)
/// POST   /       create (multipart, admin)
/// GET    /{id}   detail (public)
/// PUT    /{id}   update (multipart, admin)
/// DELETE /{id}   delete record + file (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(portfolio::list).post(portfolio::create))
        .route(
            "/{id}",
            get(portfolio::get)
                .put(portfolio::update)
                .delete(portfolio::delete),
        )
}
