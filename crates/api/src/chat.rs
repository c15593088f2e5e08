//! Pass-through client for the third-party chat-completion API.
//!
//! The proxy never touches the store and must not block CRUD paths: the
//! upstream call has a hard timeout and every failure mode -- unconfigured,
//! network, non-2xx status, malformed body -- degrades to a generic
//! fallback reply.

use std::time::Duration;

use serde_json::json;

use crate::config::ChatConfig;

/// Reply returned whenever the upstream is unavailable or misbehaves.
pub const FALLBACK_REPLY: &str =
    "Sorry, the assistant is temporarily unavailable. Please use the contact form and we will get back to you.";

/// Chat-completion upstream client. Holds a reusable HTTP client when
/// configured; disabled otherwise.
pub struct ChatClient {
    inner: Option<(reqwest::Client, ChatConfig)>,
}

impl ChatClient {
    /// Build a client from optional config. `None` yields a permanently
    /// disabled client that always answers with the fallback.
    pub fn new(config: Option<ChatConfig>) -> Self {
        let inner = config.map(|cfg| {
            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(cfg.timeout_secs))
                .build()
                .unwrap_or_default();
            (client, cfg)
        });
        Self { inner }
    }

    /// Send a user message upstream and return the completion text, or the
    /// fallback reply on any failure.
    pub async fn complete(&self, message: &str) -> String {
        let Some((client, cfg)) = &self.inner else {
            return FALLBACK_REPLY.to_string();
        };

        match self.request(client, cfg, message).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "Chat upstream call failed, returning fallback");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    async fn request(
        &self,
        client: &reqwest::Client,
        cfg: &ChatConfig,
        message: &str,
    ) -> Result<String, reqwest::Error> {
        let body = json!({
            "model": cfg.model,
            "messages": [{ "role": "user", "content": message }],
        });

        let response = client
            .post(&cfg.endpoint)
            .bearer_auth(&cfg.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: serde_json::Value = response.json().await?;
        let reply = payload["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or(FALLBACK_REPLY)
            .to_string();
        Ok(reply)
    }
}
