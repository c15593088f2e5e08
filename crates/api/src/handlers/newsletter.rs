//! Handlers for the `/newsletter` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::ValidateEmail;
use vitrine_core::error::CoreError;
use vitrine_db::repositories::newsletter_repo::SubscribeOutcome;
use vitrine_db::repositories::NewsletterRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /api/newsletter/subscribe`.
#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    #[serde(default)]
    pub email: String,
}

/// POST /api/newsletter/subscribe
///
/// Public subscription. A duplicate email is a soft outcome reported as
/// `already_subscribed`, never an error to the end user.
pub async fn subscribe(
    State(state): State<AppState>,
    Json(input): Json<SubscribeRequest>,
) -> AppResult<impl IntoResponse> {
    let email = input.email.trim();
    if email.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Email is required".into(),
        )));
    }
    if !email.validate_email() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        ))));
    }

    let outcome = NewsletterRepo::subscribe(&state.pool, email).await?;

    let status = match outcome {
        SubscribeOutcome::Subscribed => {
            tracing::info!("Newsletter subscription added");
            "subscribed"
        }
        SubscribeOutcome::AlreadySubscribed => "already_subscribed",
    };

    Ok(Json(serde_json::json!({ "status": status })))
}

/// GET /api/admin/subscribers
///
/// Full subscriber list for the admin panel. Admin only.
pub async fn list_subscribers(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let subscriptions = NewsletterRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: subscriptions,
    }))
}
