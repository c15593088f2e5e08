//! Route definitions for the chatbot proxy, registered under `/chat`.

use axum::routing::post;
use axum::Router;

use crate::handlers::chat;
use crate::state::AppState;

/// ```text
/// POST /   forward a message to the completion upstream (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(chat::complete))
}
