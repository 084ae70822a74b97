use super::{Comment, HistoryEntry, Ticket};

/// A ticket together with the activity the classifier inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    pub ticket: Ticket,
    /// Comments in the order the tracker returned them (oldest first).
    pub comments: Vec<Comment>,
    /// Change-history entries; empty unless the query expanded the changelog.
    pub history: Vec<HistoryEntry>,
}
