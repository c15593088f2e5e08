//! Optional SMTP notification for new feedback.
//!
//! Fire-and-forget: the feedback handler spawns the send and returns
//! immediately; delivery failures are logged and never surface to the
//! submitting client.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use vitrine_db::models::feedback::FeedbackEntry;

use crate::config::SmtpConfig;

/// SMTP relay for feedback notification email.
pub struct Notifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    to: String,
}

impl Notifier {
    /// Build a notifier from SMTP settings. Returns `None` when the relay
    /// host cannot be resolved into a transport.
    pub fn new(config: &SmtpConfig) -> Option<Self> {
        let transport = match AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host) {
            Ok(builder) => builder
                .credentials(Credentials::new(
                    config.username.clone(),
                    config.password.clone(),
                ))
                .build(),
            Err(e) => {
                tracing::warn!(host = %config.host, error = %e, "Invalid SMTP relay, notifications disabled");
                return None;
            }
        };

        Some(Self {
            transport,
            from: config.from.clone(),
            to: config.to.clone(),
        })
    }

    /// Send the new-feedback notice. Errors are logged, not returned.
    pub async fn send_feedback_notice(&self, entry: &FeedbackEntry) {
        let body = format!(
            "New feedback from {} <{}>\nRating: {}/5\n\n{}",
            entry.name, entry.email, entry.rating, entry.message
        );

        let message = match Message::builder()
            .from(match self.from.parse() {
                Ok(mbox) => mbox,
                Err(e) => {
                    tracing::warn!(error = %e, "Invalid notification sender address");
                    return;
                }
            })
            .to(match self.to.parse() {
                Ok(mbox) => mbox,
                Err(e) => {
                    tracing::warn!(error = %e, "Invalid notification recipient address");
                    return;
                }
            })
            .subject(format!("New feedback from {}", entry.name))
            .header(ContentType::TEXT_PLAIN)
            .body(body)
        {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to build notification email");
                return;
            }
        };

        if let Err(e) = self.transport.send(message).await {
            tracing::warn!(error = %e, "Failed to send feedback notification");
        }
    }
}
