//! Tracker error types.

use thiserror::Error;

/// Errors that can occur when talking to the Jira REST API.
#[derive(Debug, Error)]
pub enum JiraError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Jira returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by Jira.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// No workflow transition leads to the requested status.
    #[error("no transition to '{status}' available for {key}")]
    NoMatchingTransition {
        /// Ticket key.
        key: String,
        /// Requested destination status name.
        status: String,
    },

    /// A response field could not be interpreted.
    #[error("parse error: {0}")]
    Parse(String),
}
