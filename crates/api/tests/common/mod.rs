//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as `main.rs`)
//! against the per-test database provided by `#[sqlx::test]`.

#![allow(dead_code)] // not every test file uses every helper

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use vitrine_api::auth::password::hash_password;
use vitrine_api::chat::ChatClient;
use vitrine_api::config::{AdminConfig, ServerConfig};
use vitrine_api::media::MediaStore;
use vitrine_api::router::build_app_router;
use vitrine_api::state::AppState;

/// Admin credentials used by every test.
pub const TEST_ADMIN_USERNAME: &str = "admin";
pub const TEST_ADMIN_PASSWORD: &str = "test-admin-password";

/// Build a test `ServerConfig` with safe defaults and the test admin
/// credential pair.
pub fn test_config(media_root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        media_root: media_root.display().to_string(),
        admin: AdminConfig {
            username: TEST_ADMIN_USERNAME.to_string(),
            password_hash: hash_password(TEST_ADMIN_PASSWORD)
                .expect("hashing should succeed"),
            session_expiry_hours: 12,
        },
        chat: None,
        smtp: None,
    }
}

/// Build the full application router with all middleware layers, storing
/// media under `media_root`.
///
/// This goes through [`build_app_router`] so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app_with_media(pool: PgPool, media_root: &Path) -> Router {
    let config = test_config(media_root);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        media: Arc::new(MediaStore::new(media_root)),
        chat: Arc::new(ChatClient::new(None)),
        notifier: None,
    };
    build_app_router(state, &config)
}

/// Build the application router with a throwaway media directory.
pub fn build_test_app(pool: PgPool) -> Router {
    let media_root = tempfile::tempdir().expect("tempdir").keep();
    build_test_app_with_media(pool, &media_root)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// GET a path.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    app.oneshot(request).await.expect("response")
}

/// GET a path with a bearer session token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request");
    app.oneshot(request).await.expect("response")
}

/// POST a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    app.oneshot(request).await.expect("response")
}

/// POST a JSON body with a bearer session token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request");
    app.oneshot(request).await.expect("response")
}

/// PUT a JSON body with a bearer session token.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request");
    app.oneshot(request).await.expect("response")
}

/// DELETE a path, optionally with a bearer session token.
pub async fn delete_req(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("DELETE").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::empty()).expect("request");
    app.oneshot(request).await.expect("response")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Log in with the test admin credentials and return the session token.
pub async fn login_admin(app: Router) -> String {
    let body = serde_json::json!({
        "username": TEST_ADMIN_USERNAME,
        "password": TEST_ADMIN_PASSWORD,
    });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK, "admin login should succeed");
    let json = body_json(response).await;
    json["token"]
        .as_str()
        .expect("login response must contain a token")
        .to_string()
}

// ---------------------------------------------------------------------------
// Multipart helpers
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// Build a `multipart/form-data` body from text fields and an optional file
/// part. Returns `(content_type, body_bytes)`.
pub fn multipart_body(
    text_fields: &[(&str, &str)],
    file: Option<(&str, &[u8])>,
) -> (String, Vec<u8>) {
    let mut body = Vec::new();

    for (name, value) in text_fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((filename, data)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

/// Send a multipart request with a bearer session token.
pub async fn send_multipart(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    content_type: String,
    body: Vec<u8>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", content_type);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(body)).expect("request");
    app.oneshot(request).await.expect("response")
}
