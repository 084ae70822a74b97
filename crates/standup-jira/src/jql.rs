//! The three issue searches the report is built from.

use standup_core::enums::TicketStatus;
use standup_core::window::ActivityWindow;

/// Fields requested for every search.
pub const REPORT_FIELDS: &str = "key,status,comment,summary";

/// A filtered issue search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueQuery {
    pub jql: String,
    pub fields: &'static str,
    /// Attach each issue's change history (`expand=changelog`).
    pub expand_changelog: bool,
}

impl IssueQuery {
    /// Tickets the owner may have worked on inside the window, most
    /// recently updated first, with change history attached.
    #[must_use]
    pub fn recently_touched(window: &ActivityWindow) -> Self {
        let statuses = status_clause(&[
            TicketStatus::InProgress,
            TicketStatus::OnHold,
            TicketStatus::Blocked,
        ]);
        Self {
            jql: format!(
                "assignee = currentUser() AND updated >= \"{}\" AND {statuses} ORDER BY updated DESC",
                window.start().format("%Y-%m-%d")
            ),
            fields: REPORT_FIELDS,
            expand_changelog: true,
        }
    }

    /// The owner's work queue, most urgent first.
    #[must_use]
    pub fn work_queue() -> Self {
        let statuses = status_clause(&[
            TicketStatus::InProgress,
            TicketStatus::OnHold,
            TicketStatus::ToDo,
        ]);
        Self {
            jql: format!(
                "assignee = currentUser() AND {statuses} ORDER BY priority DESC, duedate ASC"
            ),
            fields: REPORT_FIELDS,
            expand_changelog: false,
        }
    }

    /// The owner's blocked tickets.
    #[must_use]
    pub fn blocked() -> Self {
        Self {
            jql: format!(
                "assignee = currentUser() AND {}",
                status_clause(&[TicketStatus::Blocked])
            ),
            fields: REPORT_FIELDS,
            expand_changelog: false,
        }
    }
}

/// `status in ("A", "B")` using canonical names. Jira compares status names
/// case-insensitively, so spelling variants need not be listed.
fn status_clause(statuses: &[TicketStatus]) -> String {
    let names: Vec<String> = statuses
        .iter()
        .map(|status| format!("\"{}\"", status.canonical_name()))
        .collect();
    format!("status in ({})", names.join(", "))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn recently_touched_bounds_by_window_start() {
        let window = ActivityWindow::for_date(NaiveDate::from_ymd_opt(2024, 3, 18).unwrap());
        let query = IssueQuery::recently_touched(&window);
        assert_eq!(
            query.jql,
            "assignee = currentUser() AND updated >= \"2024-03-15\" AND \
             status in (\"In Progress\", \"On Hold\", \"Blocked\") ORDER BY updated DESC"
        );
        assert!(query.expand_changelog);
    }

    #[test]
    fn work_queue_orders_by_priority_then_due_date() {
        let query = IssueQuery::work_queue();
        assert_eq!(
            query.jql,
            "assignee = currentUser() AND status in (\"In Progress\", \"On Hold\", \"To Do\") \
             ORDER BY priority DESC, duedate ASC"
        );
        assert!(!query.expand_changelog);
    }

    #[test]
    fn blocked_is_unordered() {
        let query = IssueQuery::blocked();
        assert_eq!(
            query.jql,
            "assignee = currentUser() AND status in (\"Blocked\")"
        );
        assert_eq!(query.fields, REPORT_FIELDS);
    }
}
