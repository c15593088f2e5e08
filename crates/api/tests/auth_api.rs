mod common;

use axum::http::{header, StatusCode};
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;
use vitrine_db::models::session::CreateSession;
use vitrine_db::repositories::SessionRepo;

use common::{
    body_json, build_test_app, get, get_auth, login_admin, post_json, post_json_auth,
};

#[sqlx::test(migrations = "../db/migrations")]
async fn login_returns_token_and_session_cookie(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/auth/login",
        json!({
            "username": common::TEST_ADMIN_USERNAME,
            "password": common::TEST_ADMIN_PASSWORD,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login should set a session cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("vitrine_session="));
    assert!(cookie.contains("HttpOnly"));

    let json = body_json(response).await;
    assert!(json["token"].is_string());
    assert_eq!(json["expires_in"], 12 * 3600);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_rejects_wrong_password(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/auth/login",
        json!({
            "username": common::TEST_ADMIN_USERNAME,
            "password": "not-the-password",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_rejects_unknown_username(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/auth/login",
        json!({
            "username": "somebody-else",
            "password": common::TEST_ADMIN_PASSWORD,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_route_without_session_redirects_to_login(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/admin/dashboard").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/admin/login"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_route_with_garbage_token_redirects_to_login(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get_auth(app, "/api/admin/dashboard", "not-a-real-token").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/admin/login"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_route_with_valid_session_succeeds(pool: PgPool) {
    let app = build_test_app(pool);
    let token = login_admin(app.clone()).await;

    let response = get_auth(app, "/api/admin/dashboard", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn expired_session_fails_the_gate(pool: PgPool) {
    let app = build_test_app(pool.clone());

    // Seed a session that expired an hour ago; only the hash is stored.
    let (token, token_hash) = vitrine_api::auth::session::generate_session_token();
    SessionRepo::create(
        &pool,
        &CreateSession {
            token_hash,
            expires_at: Utc::now() - chrono::Duration::hours(1),
        },
    )
    .await
    .expect("session insert");

    let response = get_auth(app, "/api/admin/dashboard", &token).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/admin/login"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn logout_revokes_the_session(pool: PgPool) {
    let app = build_test_app(pool);
    let token = login_admin(app.clone()).await;

    let response = post_json_auth(app.clone(), "/api/auth/logout", &token, json!({})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // A revoked token no longer grants access.
    let response = get_auth(app, "/api/admin/dashboard", &token).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}
