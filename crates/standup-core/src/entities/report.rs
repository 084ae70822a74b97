use serde::{Deserialize, Serialize};

use super::Ticket;

/// A meal to suggest for lunch, with its recipe source when one is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunchSuggestion {
    pub name: String,
    pub recipe_url: Option<String>,
}

impl LunchSuggestion {
    /// Placeholder used when no meal could be fetched.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            name: "Chef's Special".to_string(),
            recipe_url: None,
        }
    }
}

/// The daily report: yesterday's work, today's work, blockers and lunch.
///
/// Each list keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    previous: Vec<Ticket>,
    next: Vec<Ticket>,
    blocked: Vec<Ticket>,
    lunch: Option<LunchSuggestion>,
}

impl Report {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_previous(&mut self, ticket: Ticket) {
        self.previous.push(ticket);
    }

    pub fn add_next(&mut self, ticket: Ticket) {
        self.next.push(ticket);
    }

    pub fn add_blocked(&mut self, ticket: Ticket) {
        self.blocked.push(ticket);
    }

    pub fn set_lunch(&mut self, lunch: LunchSuggestion) {
        self.lunch = Some(lunch);
    }

    #[must_use]
    pub fn previous(&self) -> &[Ticket] {
        &self.previous
    }

    #[must_use]
    pub fn next(&self) -> &[Ticket] {
        &self.next
    }

    #[must_use]
    pub fn blocked(&self) -> &[Ticket] {
        &self.blocked
    }

    #[must_use]
    pub const fn lunch(&self) -> Option<&LunchSuggestion> {
        self.lunch.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::enums::TicketStatus;

    fn ticket(key: &str) -> Ticket {
        Ticket::new(key, "title", TicketStatus::InProgress, None, "https://j")
    }

    #[test]
    fn sections_keep_insertion_order() {
        let mut report = Report::new();
        report.add_next(ticket("B-2"));
        report.add_next(ticket("A-1"));
        report.add_next(ticket("C-3"));

        let keys: Vec<_> = report.next().iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, vec!["B-2", "A-1", "C-3"]);
    }

    #[test]
    fn new_report_is_empty() {
        let report = Report::new();
        assert!(report.previous().is_empty());
        assert!(report.next().is_empty());
        assert!(report.blocked().is_empty());
        assert!(report.lunch().is_none());
    }

    #[test]
    fn placeholder_lunch_has_no_recipe() {
        let lunch = LunchSuggestion::placeholder();
        assert_eq!(lunch.name, "Chef's Special");
        assert!(lunch.recipe_url.is_none());
    }
}
