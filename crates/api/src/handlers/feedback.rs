//! Handlers for the `/feedback` resource.
//!
//! Submission is public (the AJAX feedback form posts here); reply and
//! delete are admin-gated.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use vitrine_core::error::CoreError;
use vitrine_core::feedback::{validate_submission, FeedbackOutcome, FeedbackSubmission};
use vitrine_core::types::DbId;
use vitrine_db::models::feedback::CreateFeedback;
use vitrine_db::repositories::FeedbackRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /api/feedback`. Field names match the public form.
#[derive(Debug, Deserialize)]
pub struct SubmitFeedbackRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub message: String,
    pub rating: Option<i32>,
    /// Honeypot field. Humans never fill it; bots do.
    pub website: Option<String>,
}

/// Query parameters for the feedback listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
}

/// Request body for `PUT /api/feedback/{id}/reply`.
#[derive(Debug, Deserialize)]
pub struct ReplyRequest {
    pub reply: String,
}

/// POST /api/feedback
///
/// Public submission. Validation errors return 400 with a structured
/// payload; a tripped honeypot returns the normal success shape while
/// storing nothing, so bots cannot tell they were rejected.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<SubmitFeedbackRequest>,
) -> AppResult<impl IntoResponse> {
    let submission = FeedbackSubmission {
        name: input.name,
        email: input.email,
        phone: input.phone,
        message: input.message,
        rating: input.rating,
        honeypot: input.website,
    };

    let valid = match validate_submission(&submission).map_err(AppError::Core)? {
        FeedbackOutcome::Accept(valid) => valid,
        FeedbackOutcome::Spam => {
            tracing::info!("Feedback honeypot tripped, dropping submission");
            return Ok((
                StatusCode::CREATED,
                Json(serde_json::json!({ "status": "ok" })),
            ));
        }
    };

    let entry = FeedbackRepo::create(
        &state.pool,
        &CreateFeedback {
            name: valid.name,
            email: valid.email,
            phone: valid.phone,
            message: valid.message,
            rating: valid.rating,
        },
    )
    .await?;

    tracing::info!(feedback_id = entry.id, rating = entry.rating, "Feedback submitted");

    // Notification is fire-and-forget; delivery must not delay the response.
    if let Some(notifier) = state.notifier.clone() {
        let entry_for_mail = entry.clone();
        tokio::spawn(async move {
            notifier.send_feedback_notice(&entry_for_mail).await;
        });
    }

    Ok((StatusCode::CREATED, Json(serde_json::json!({ "status": "ok" }))))
}

/// GET /api/feedback
///
/// Public listing, newest-first, optionally limited.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    if params.limit.is_some_and(|l| l < 0) {
        return Err(AppError::Core(CoreError::Validation(
            "limit must not be negative".into(),
        )));
    }
    let entries = FeedbackRepo::list(&state.pool, params.limit).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// PUT /api/feedback/{id}/reply
///
/// Set the admin reply on an entry. Admin only.
pub async fn reply(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReplyRequest>,
) -> AppResult<impl IntoResponse> {
    let entry = FeedbackRepo::set_reply(&state.pool, id, &input.reply)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FeedbackEntry",
            id,
        }))?;

    tracing::info!(feedback_id = id, "Feedback reply set");

    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/feedback/{id}
///
/// Remove an entry. Admin only.
pub async fn delete(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !FeedbackRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "FeedbackEntry",
            id,
        }));
    }

    tracing::info!(feedback_id = id, "Feedback deleted");

    Ok(StatusCode::NO_CONTENT)
}
