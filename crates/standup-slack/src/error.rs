//! Notifier error types.

use thiserror::Error;

/// Errors that can occur when posting to Slack.
#[derive(Debug, Error)]
pub enum SlackError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Slack answered with a non-success HTTP status.
    #[error("HTTP status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// Slack accepted the request but reported `"ok": false`.
    #[error("Slack API error: {0}")]
    Api(String),
}
