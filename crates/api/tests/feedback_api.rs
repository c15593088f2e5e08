mod common;

use axum::http::{header, StatusCode};
use serde_json::json;
use sqlx::PgPool;

use common::{
    body_json, build_test_app, delete_req, get, login_admin, post_json, put_json_auth,
};

#[sqlx::test(migrations = "../db/migrations")]
async fn valid_submission_appears_in_listing(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/feedback",
        json!({
            "name": "Ana",
            "email": "ana@example.com",
            "message": "Great studio, the new site looks wonderful.",
            "rating": 5,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");

    let response = get(app, "/api/feedback").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let entries = json["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "Ana");
    assert_eq!(entries[0]["rating"], 5);
    assert!(entries[0]["reply"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_is_newest_first_and_honors_limit(pool: PgPool) {
    let app = build_test_app(pool);

    for i in 1..=3 {
        let response = post_json(
            app.clone(),
            "/api/feedback",
            json!({
                "email": format!("visitor{i}@example.com"),
                "message": format!("message number {i}"),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app.clone(), "/api/feedback").await;
    let json = body_json(response).await;
    let entries = json["data"].as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["message"], "message number 3");
    assert_eq!(entries[2]["message"], "message number 1");

    let response = get(app, "/api/feedback?limit=2").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn negative_limit_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/feedback?limit=-1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_name_defaults_to_anonymous(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/feedback",
        json!({
            "email": "quiet@example.com",
            "message": "no name given",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(get(app, "/api/feedback").await).await;
    assert_eq!(json["data"][0]["name"], "Anonymous");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_email_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/feedback",
        json!({
            "email": "not-an-email",
            "message": "hello",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(get(app, "/api/feedback").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_message_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/feedback",
        json!({
            "email": "terse@example.com",
            "message": "   ",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn tripped_honeypot_stores_nothing_but_looks_successful(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/feedback",
        json!({
            "email": "bot@example.com",
            "message": "buy cheap watches",
            "website": "http://spam.example.com",
        }),
    )
    .await;
    // Indistinguishable from a real success.
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");

    let json = body_json(get(app, "/api/feedback").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn out_of_range_rating_is_clamped(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/feedback",
        json!({
            "email": "fan@example.com",
            "message": "eleven out of ten",
            "rating": 11,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(get(app, "/api/feedback").await).await;
    assert_eq!(json["data"][0]["rating"], 5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reply_requires_admin_session(pool: PgPool) {
    let app = build_test_app(pool);

    post_json(
        app.clone(),
        "/api/feedback",
        json!({ "email": "ana@example.com", "message": "hello" }),
    )
    .await;
    let json = body_json(get(app.clone(), "/api/feedback").await).await;
    let id = json["data"][0]["id"].as_i64().unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/api/feedback/{id}/reply"),
        "bogus-token",
        json!({ "reply": "thanks!" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/admin/login"
    );

    // The entry is untouched.
    let json = body_json(get(app, "/api/feedback").await).await;
    assert!(json["data"][0]["reply"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_can_reply_and_delete(pool: PgPool) {
    let app = build_test_app(pool);
    let token = login_admin(app.clone()).await;

    post_json(
        app.clone(),
        "/api/feedback",
        json!({ "email": "ana@example.com", "message": "hello" }),
    )
    .await;
    let json = body_json(get(app.clone(), "/api/feedback").await).await;
    let id = json["data"][0]["id"].as_i64().unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/api/feedback/{id}/reply"),
        &token,
        json!({ "reply": "Thank you for the kind words." }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["reply"], "Thank you for the kind words.");

    let response = delete_req(app.clone(), &format!("/api/feedback/{id}"), Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(app, "/api/feedback").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_missing_entry_is_404(pool: PgPool) {
    let app = build_test_app(pool);
    let token = login_admin(app.clone()).await;

    let response = delete_req(app, "/api/feedback/9999", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
