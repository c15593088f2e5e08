pub mod blog_post;
pub mod feedback;
pub mod newsletter;
pub mod portfolio;
pub mod session;
