//! Handlers for the admin auth flow (login, logout).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use vitrine_core::error::CoreError;
use vitrine_db::models::session::CreateSession;
use vitrine_db::repositories::SessionRepo;

use crate::auth::password::verify_password;
use crate::auth::session::{generate_session_token, SESSION_COOKIE};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::state::AppState;

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response. The token is also set as a session cookie.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Session lifetime in seconds.
    pub expires_in: i64,
}

/// POST /api/auth/login
///
/// Authenticate against the static admin credential pair. On success, a
/// session row is created (token stored hashed) and the plaintext token is
/// returned in the body and as an HttpOnly cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let admin = &state.config.admin;

    let credentials_valid = input.username == admin.username
        && verify_password(&input.password, &admin.password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !credentials_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let (token, token_hash) = generate_session_token();
    let expires_in = admin.session_expiry_hours * 3600;
    let expires_at = Utc::now() + chrono::Duration::hours(admin.session_expiry_hours);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            token_hash,
            expires_at,
        },
    )
    .await?;

    tracing::info!(username = %admin.username, "Admin logged in");

    let cookie = format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={expires_in}"
    );

    Ok((
        StatusCode::OK,
        [(SET_COOKIE, cookie)],
        Json(LoginResponse { token, expires_in }),
    ))
}

/// POST /api/auth/logout
///
/// Revoke the current session and clear the cookie. Returns 204 No Content.
pub async fn logout(
    admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    SessionRepo::revoke(&state.pool, admin.session_id).await?;

    tracing::info!(session_id = admin.session_id, "Admin logged out");

    let cookie = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; Max-Age=0");
    Ok((StatusCode::NO_CONTENT, [(SET_COOKIE, cookie)]))
}
