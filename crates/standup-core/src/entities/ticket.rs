use serde::{Deserialize, Serialize};

use crate::enums::TicketStatus;

/// Shown in place of the last comment when a ticket has none.
pub const NO_COMMENTS: &str = "No comments";

/// A tracker ticket as it appears in the report.
///
/// Only `status` changes after construction, and only once the tracker has
/// confirmed a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Tracker key, e.g. `PROJ-42`.
    pub key: String,
    pub title: String,
    pub status: TicketStatus,
    /// Body of the chronologically last comment, or [`NO_COMMENTS`].
    pub last_comment: String,
    pub url: String,
}

impl Ticket {
    /// Build a ticket, deriving its browse URL from the tracker base URL.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        status: TicketStatus,
        last_comment: Option<String>,
        base_url: &str,
    ) -> Self {
        let key = key.into();
        let url = format!("{}/browse/{key}", base_url.trim_end_matches('/'));
        Self {
            key,
            title: title.into(),
            status,
            last_comment: last_comment.unwrap_or_else(|| NO_COMMENTS.to_string()),
            url,
        }
    }
}
