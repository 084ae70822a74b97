//! Activity classifier for the "what I did yesterday" section.
//!
//! A recently-updated ticket only belongs in the report if the owner
//! actually worked on it inside the activity window. Comments are checked
//! first; the change history is the fallback for work that left no comment.

use crate::entities::{IssueRecord, Ticket};
use crate::window::ActivityWindow;

/// Outcome of classifying one ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Include(Ticket),
    Skip,
}

impl Classification {
    #[must_use]
    pub fn into_ticket(self) -> Option<Ticket> {
        match self {
            Self::Include(ticket) => Some(ticket),
            Self::Skip => None,
        }
    }
}

/// Decide whether `record` counts as the owner's recent work.
///
/// Precondition: `record.comments` is in chronologically non-decreasing
/// order, which is how the tracker returns them. The comment scan walks
/// newest-first and stops at the first comment before the window start.
/// Out-of-order comments can make an in-window owner comment invisible to
/// that scan; the history check still applies in that case.
///
/// The returned ticket's `last_comment` is the body of the last comment
/// overall, whether or not it falls inside the window. An empty body shows
/// as [`NO_COMMENTS`](crate::entities::NO_COMMENTS).
#[must_use]
pub fn classify(record: IssueRecord, window: &ActivityWindow, owner: &str) -> Classification {
    let user_commented = record
        .comments
        .iter()
        .rev()
        .take_while(|comment| window.contains(comment.created))
        .any(|comment| comment.author.is(owner));

    let user_worked = user_commented
        || record
            .history
            .iter()
            .any(|entry| window.contains(entry.created) && entry.author.is(owner));

    if !user_worked {
        return Classification::Skip;
    }

    let mut ticket = record.ticket;
    if let Some(last) = record.comments.last().filter(|c| !c.body.is_empty()) {
        ticket.last_comment.clone_from(&last.body);
    }
    Classification::Include(ticket)
}

/// Classify every record, keeping included tickets in input order.
#[must_use]
pub fn classify_all(
    records: impl IntoIterator<Item = IssueRecord>,
    window: &ActivityWindow,
    owner: &str,
) -> Vec<Ticket> {
    records
        .into_iter()
        .filter_map(|record| classify(record, window, owner).into_ticket())
        .collect()
}
