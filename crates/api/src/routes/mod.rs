pub mod auth;
pub mod blog;
pub mod chat;
pub mod dashboard;
pub mod feedback;
pub mod health;
pub mod newsletter;
pub mod pages;
pub mod portfolio;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                  login (public)
/// /auth/logout                 logout (requires session)
///
/// /feedback                    list (GET), submit (POST, public)
/// /feedback/{id}               delete (admin)
/// /feedback/{id}/reply         set reply (PUT, admin)
///
/// /portfolio                   list (GET), create (POST multipart, admin)
/// /portfolio/{id}              get, update (PUT multipart, admin), delete (admin)
///
/// /newsletter/subscribe        subscribe (POST, public)
///
/// /blog                        list excerpts (GET), create (POST, admin)
/// /blog/{slug}                 detail by slug (GET, public)
/// /blog/{id}                   delete (admin)
///
/// /pages/{page}                page rendering context (GET, public)
///
/// /admin/dashboard             counts + recent feedback (GET, admin)
/// /admin/subscribers           newsletter subscriber list (GET, admin)
///
/// /chat                        chatbot proxy (POST, public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/feedback", feedback::router())
        .nest("/portfolio", portfolio::router())
        .nest("/newsletter", newsletter::router())
        .nest("/blog", blog::router())
        .nest("/pages", pages::router())
        .nest("/admin", dashboard::router())
        .nest("/chat", chat::router())
}
