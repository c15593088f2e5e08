//! Admin session model and DTOs.

use sqlx::FromRow;
use vitrine_core::types::{DbId, Timestamp};

/// An admin session row from the `admin_sessions` table.
///
/// Only the SHA-256 digest of the session token is stored; the plaintext
/// token lives solely with the client.
#[derive(Debug, Clone, FromRow)]
pub struct AdminSessionRow {
    pub id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new admin session.
#[derive(Debug)]
pub struct CreateSession {
    pub token_hash: String,
    pub expires_at: Timestamp,
}
