//! Session-based admin authorization extractor.
//!
//! Admin-mutating handlers take [`AdminSession`] as a parameter, making the
//! capability check part of the handler signature rather than ambient state.
//! A request without a valid session is redirected to the login entry point
//! before the handler body runs.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use vitrine_core::types::DbId;
use vitrine_db::repositories::SessionRepo;

use crate::auth::session::{hash_session_token, SESSION_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// Proof of an active admin session, extracted from the `Authorization:
/// Bearer` header or the session cookie.
///
/// ```ignore
/// async fn admin_only(admin: AdminSession, ...) -> AppResult<Json<()>> {
///     tracing::info!(session_id = admin.session_id, "handling admin request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// Database id of the session row (used by logout to revoke it).
    pub session_id: DbId,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts).ok_or(AppError::AuthRedirect)?;

        let hash = hash_session_token(&token);
        let session = SessionRepo::find_active_by_token_hash(&state.pool, &hash)
            .await?
            .ok_or(AppError::AuthRedirect)?;

        Ok(AdminSession {
            session_id: session.id,
        })
    }
}

/// Pull the session token from the `Authorization: Bearer` header, falling
/// back to the `vitrine_session` cookie.
fn extract_token(parts: &Parts) -> Option<String> {
    if let Some(token) = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
    {
        return Some(token.to_string());
    }

    parts
        .headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(cookie_session_token)
}

/// Find the session cookie value in a `Cookie` header.
fn cookie_session_token(header: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}
