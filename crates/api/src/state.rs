use std::sync::Arc;

use crate::chat::ChatClient;
use crate::config::ServerConfig;
use crate::media::MediaStore;
use crate::notify::Notifier;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: vitrine_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Portfolio media storage (staged two-phase writes).
    pub media: Arc<MediaStore>,
    /// Chat-completion upstream client.
    pub chat: Arc<ChatClient>,
    /// Optional SMTP feedback notifier.
    pub notifier: Option<Arc<Notifier>>,
}
