//! Vitrine API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes, media
//! store) so integration tests and the binary entrypoint can both access
//! them.

pub mod auth;
pub mod chat;
pub mod config;
pub mod error;
pub mod handlers;
pub mod media;
pub mod middleware;
pub mod notify;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
