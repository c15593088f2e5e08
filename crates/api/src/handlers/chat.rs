//! Chatbot proxy handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// POST /api/chat
///
/// Forward a visitor message to the chat-completion upstream. Upstream
/// failures degrade to the fallback reply with a 200 -- the proxy never
/// turns a third-party outage into an error on the public site.
pub async fn complete(
    State(state): State<AppState>,
    Json(input): Json<ChatRequest>,
) -> AppResult<impl IntoResponse> {
    let message = input.message.trim();
    if message.is_empty() {
        return Err(AppError::BadRequest("Message is required".into()));
    }

    let reply = state.chat.complete(message).await;

    Ok(Json(serde_json::json!({ "reply": reply })))
}
