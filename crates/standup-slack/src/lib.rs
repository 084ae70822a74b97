//! # standup-slack
//!
//! Renders the report as Slack Block Kit blocks and posts it to the
//! configured channel with `chat.postMessage`.

pub mod blocks;
mod error;

pub use blocks::render_report;
pub use error::SlackError;

use std::time::Duration;

use serde::Deserialize;
use standup_config::SlackConfig;

/// Plain-text summary for clients that cannot render blocks.
pub const FALLBACK_TEXT: &str = "Daily Jira Report";

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Client bound to one bot token and destination channel.
pub struct SlackClient {
    http: reqwest::Client,
    api_base: String,
    bot_token: String,
    channel_id: String,
}

impl SlackClient {
    /// Create a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SlackError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &SlackConfig, timeout: Duration) -> Result<Self, SlackError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("standup/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            bot_token: config.bot_token.clone(),
            channel_id: config.channel_id.clone(),
        })
    }

    /// Post `blocks` to the channel with [`FALLBACK_TEXT`] as the summary.
    ///
    /// # Errors
    ///
    /// Returns [`SlackError`] on transport failure, a non-success HTTP
    /// status, or an `"ok": false` reply.
    pub async fn post_report(&self, blocks: &[serde_json::Value]) -> Result<(), SlackError> {
        let url = format!("{}/chat.postMessage", self.api_base);
        let body = serde_json::json!({
            "channel": self.channel_id,
            "blocks": blocks,
            "text": FALLBACK_TEXT,
        });

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.bot_token)
            .json(&body)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(SlackError::Status {
                status: resp.status().as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        let reply: PostMessageResponse = resp.json().await?;
        if !reply.ok {
            return Err(SlackError::Api(
                reply.error.unwrap_or_else(|| "unknown_error".to_string()),
            ));
        }
        tracing::info!(channel = %self.channel_id, blocks = blocks.len(), "slack message sent");
        Ok(())
    }
}
