//! Jira REST v2 response shapes and their conversion into domain records.

use chrono::NaiveDate;
use serde::Deserialize;
use standup_core::entities::{
    Author, Comment, HistoryEntry, IssueRecord, Ticket, parse_tracker_date,
};
use standup_core::enums::TicketStatus;

use crate::error::JiraError;

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub issues: Vec<WireIssue>,
}

#[derive(Debug, Deserialize)]
pub struct WireIssue {
    pub key: String,
    pub fields: WireFields,
    #[serde(default)]
    pub changelog: Option<WireChangelog>,
}

#[derive(Debug, Deserialize)]
pub struct WireFields {
    #[serde(default)]
    pub summary: String,
    pub status: WireStatus,
    #[serde(default)]
    pub comment: Option<WireCommentPage>,
}

#[derive(Debug, Deserialize)]
pub struct WireStatus {
    pub name: TicketStatus,
}

#[derive(Debug, Deserialize)]
pub struct WireCommentPage {
    #[serde(default)]
    pub comments: Vec<WireComment>,
}

#[derive(Debug, Deserialize)]
pub struct WireComment {
    #[serde(default)]
    pub author: WireAuthor,
    pub created: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireAuthor {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub email_address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WireChangelog {
    #[serde(default)]
    pub histories: Vec<WireHistory>,
}

#[derive(Debug, Deserialize)]
pub struct WireHistory {
    #[serde(default)]
    pub author: WireAuthor,
    pub created: String,
}

#[derive(Debug, Deserialize)]
pub struct TransitionsResponse {
    #[serde(default)]
    pub transitions: Vec<WireTransition>,
}

#[derive(Debug, Deserialize)]
pub struct WireTransition {
    pub id: String,
    pub to: WireTransitionTarget,
}

/// Transition destinations are matched by their exact raw name, so this
/// stays a plain string.
#[derive(Debug, Deserialize)]
pub struct WireTransitionTarget {
    pub name: String,
}

impl From<WireAuthor> for Author {
    fn from(author: WireAuthor) -> Self {
        Self {
            name: author.name,
            display_name: author.display_name,
            email: author.email_address,
        }
    }
}

impl WireIssue {
    /// Convert into an [`IssueRecord`], reading activity dates.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError::Parse`] if a comment or history timestamp has no
    /// readable date.
    pub fn into_record(self, base_url: &str) -> Result<IssueRecord, JiraError> {
        let key = self.key;
        let comments = self
            .fields
            .comment
            .map(|page| page.comments)
            .unwrap_or_default()
            .into_iter()
            .map(|c| {
                Ok(Comment {
                    created: read_date(&key, &c.created)?,
                    author: c.author.into(),
                    body: c.body,
                })
            })
            .collect::<Result<Vec<_>, JiraError>>()?;
        let history = self
            .changelog
            .map(|changelog| changelog.histories)
            .unwrap_or_default()
            .into_iter()
            .map(|h| {
                Ok(HistoryEntry {
                    created: read_date(&key, &h.created)?,
                    author: h.author.into(),
                })
            })
            .collect::<Result<Vec<_>, JiraError>>()?;

        let last_comment = comments.last().map(|c| c.body.clone());
        let ticket = Ticket::new(
            key,
            self.fields.summary,
            self.fields.status.name,
            last_comment,
            base_url,
        );
        Ok(IssueRecord {
            ticket,
            comments,
            history,
        })
    }
}

fn read_date(key: &str, timestamp: &str) -> Result<NaiveDate, JiraError> {
    parse_tracker_date(timestamp)
        .ok_or_else(|| JiraError::Parse(format!("{key}: unreadable timestamp '{timestamp}'")))
}
