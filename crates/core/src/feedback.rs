//! Feedback submission validation.
//!
//! Required/optional field policy (superset of the observed site revisions):
//! `email` and `message` are required, `name` defaults to `"Anonymous"`,
//! `phone` is optional, `rating` is clamped to 0–5. A non-empty honeypot
//! field marks the submission as spam; callers drop it without telling the
//! sender.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Default display name for submissions without one.
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// Maximum accepted rating.
pub const MAX_RATING: i32 = 5;

/// Raw feedback form fields as submitted by the client.
#[derive(Debug, Default, Clone)]
pub struct FeedbackSubmission {
    pub name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub rating: Option<i32>,
    /// Honeypot field (`website` in the form). Humans never fill it.
    pub honeypot: Option<String>,
}

/// Validation outcome for a feedback submission.
#[derive(Debug, PartialEq, Eq)]
pub enum FeedbackOutcome {
    /// Fields are valid; insert with these normalized values.
    Accept(ValidFeedback),
    /// Honeypot tripped. Report success to the sender, store nothing.
    Spam,
}

/// Normalized, insert-ready feedback values.
#[derive(Debug, PartialEq, Eq)]
pub struct ValidFeedback {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub rating: i32,
}

/// Validate and normalize a feedback submission.
///
/// Returns [`FeedbackOutcome::Spam`] when the honeypot is filled, a
/// [`CoreError::Validation`] for missing/malformed required fields, and the
/// normalized values otherwise.
pub fn validate_submission(input: &FeedbackSubmission) -> Result<FeedbackOutcome, CoreError> {
    if input
        .honeypot
        .as_deref()
        .is_some_and(|v| !v.trim().is_empty())
    {
        return Ok(FeedbackOutcome::Spam);
    }

    let email = input.email.trim();
    if email.is_empty() {
        return Err(CoreError::Validation("Email is required".into()));
    }
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }

    let message = input.message.trim();
    if message.is_empty() {
        return Err(CoreError::Validation("Message is required".into()));
    }

    let name = input
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(ANONYMOUS_NAME)
        .to_string();

    let phone = input
        .phone
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string);

    let rating = input.rating.unwrap_or(0).clamp(0, MAX_RATING);

    Ok(FeedbackOutcome::Accept(ValidFeedback {
        name,
        email: email.to_string(),
        phone,
        message: message.to_string(),
        rating,
    }))
}
