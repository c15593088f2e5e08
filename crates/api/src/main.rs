use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrine_api::chat::ChatClient;
use vitrine_api::config::ServerConfig;
use vitrine_api::media::MediaStore;
use vitrine_api::notify::Notifier;
use vitrine_api::router::build_app_router;
use vitrine_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrine_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = vitrine_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    vitrine_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    vitrine_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Media store ---
    let media = Arc::new(MediaStore::new(config.media_root.clone()));

    // --- Chat upstream ---
    let chat = Arc::new(ChatClient::new(config.chat.clone()));
    if config.chat.is_none() {
        tracing::info!("Chat upstream not configured, proxy will answer with the fallback reply");
    }

    // --- Feedback notifier ---
    let notifier = config
        .smtp
        .as_ref()
        .and_then(Notifier::new)
        .map(Arc::new);
    if notifier.is_none() {
        tracing::info!("SMTP not configured, feedback notifications disabled");
    }

    // --- App state / router ---
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        media,
        chat,
        notifier,
    };
    let app = build_app_router(state, &config);

    // Drop stale sessions left over from previous runs.
    match vitrine_db::repositories::SessionRepo::cleanup_expired(&pool).await {
        Ok(count) if count > 0 => tracing::info!(count, "Cleaned up expired admin sessions"),
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "Session cleanup failed"),
    }

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
