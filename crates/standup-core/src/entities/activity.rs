use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Who performed a comment or change.
///
/// Trackers expose different identity fields depending on deployment
/// (server installs carry `name`, cloud installs only `display_name` and
/// `email`), so all of them are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl Author {
    /// Whether this author is the report owner.
    ///
    /// `name` is compared first, falling back to `display_name` when the
    /// tracker omits it. An exact `email` match also counts.
    #[must_use]
    pub fn is(&self, owner: &str) -> bool {
        let identity = self.name.as_deref().or(self.display_name.as_deref());
        identity == Some(owner) || self.email.as_deref() == Some(owner)
    }
}

/// A comment on a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: Author,
    /// Calendar date of the comment, in the tracker's own offset.
    pub created: NaiveDate,
    pub body: String,
}

/// One entry of a ticket's change history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub author: Author,
    pub created: NaiveDate,
}

/// Read the calendar date from a tracker timestamp such as
/// `2024-03-18T09:15:02.000+0100`.
///
/// Only the leading `YYYY-MM-DD` is used, so the date is the one in the
/// tracker's offset, not converted to local time.
#[must_use]
pub fn parse_tracker_date(timestamp: &str) -> Option<NaiveDate> {
    let date = timestamp.get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
