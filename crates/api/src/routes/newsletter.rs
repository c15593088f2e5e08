//! Route definitions for newsletter subscription, registered under `/newsletter`.

use axum::routing::post;
use axum::Router;

use crate::handlers::newsletter;
use crate::state::AppState;

/// ```text
/// POST /subscribe   subscribe (public; duplicate email is a soft outcome)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/subscribe", post(newsletter::subscribe))
}
