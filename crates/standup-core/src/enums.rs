//! Ticket status enumeration.
//!
//! Tracker status names arrive in several spellings ("On Hold", "ON HOLD",
//! "on-hold"). They are normalised once, at the response boundary, so the
//! classifier and rebalancer only ever compare canonical variants.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TicketStatus
// ---------------------------------------------------------------------------

/// Workflow status of a tracker ticket.
///
/// ```text
/// to_do → in_progress → done
/// on_hold → in_progress
/// blocked
/// ```
///
/// `Other` keeps an unrecognised tracker name for display only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketStatus {
    ToDo,
    InProgress,
    OnHold,
    Blocked,
    Done,
    Other(String),
}

impl TicketStatus {
    /// Map a tracker status name onto a canonical variant.
    ///
    /// Comparison ignores ASCII case and treats any run of spaces, `-` or
    /// `_` as a single separator.
    #[must_use]
    pub fn from_tracker_name(name: &str) -> Self {
        match normalize(name).as_str() {
            "to do" => Self::ToDo,
            "in progress" => Self::InProgress,
            "on hold" => Self::OnHold,
            "blocked" => Self::Blocked,
            "done" => Self::Done,
            _ => Self::Other(name.trim().to_string()),
        }
    }

    /// The tracker's canonical spelling of this status.
    #[must_use]
    pub fn canonical_name(&self) -> &str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::OnHold => "On Hold",
            Self::Blocked => "Blocked",
            Self::Done => "Done",
            Self::Other(name) => name,
        }
    }
}

fn normalize(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

impl From<String> for TicketStatus {
    fn from(name: String) -> Self {
        Self::from_tracker_name(&name)
    }
}

impl From<TicketStatus> for String {
    fn from(status: TicketStatus) -> Self {
        status.canonical_name().to_string()
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}
