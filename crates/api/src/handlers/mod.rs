pub mod auth;
pub mod blog;
pub mod chat;
pub mod dashboard;
pub mod feedback;
pub mod health;
pub mod newsletter;
pub mod pages;
pub mod portfolio;
