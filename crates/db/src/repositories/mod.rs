pub mod blog_repo;
pub mod feedback_repo;
pub mod newsletter_repo;
pub mod portfolio_repo;
pub mod session_repo;

pub use blog_repo::BlogRepo;
pub use feedback_repo::FeedbackRepo;
pub use newsletter_repo::NewsletterRepo;
pub use portfolio_repo::PortfolioRepo;
pub use session_repo::SessionRepo;
