//! Entity structs for the standup domain.
//!
//! Entities live for a single run; nothing here is persisted.

mod activity;
mod record;
mod report;
mod ticket;

pub use activity::{Author, Comment, HistoryEntry, parse_tracker_date};
pub use record::IssueRecord;
pub use report::{LunchSuggestion, Report};
pub use ticket::{NO_COMMENTS, Ticket};
