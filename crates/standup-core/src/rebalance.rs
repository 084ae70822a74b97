//! Work-queue rebalancing.
//!
//! Keeps a minimum number of tickets in progress by promoting queued ones.
//! The decision logic is a state machine that never touches the tracker
//! itself: the caller asks for the next [`Promotion`], performs the status
//! transition, and reports the outcome back.
//!
//! ```text
//! next_promotion() ──► caller transitions ticket ──► resolve(outcome)
//!        ▲                                                 │
//!        └─────────────────────────────────────────────────┘
//!                 until target reached or pools empty
//! ```
//!
//! On-hold tickets are always tried before to-do tickets. Within a pool,
//! the queue order from the tracker (priority, then due date) is kept.

use std::collections::VecDeque;

use crate::entities::Ticket;
use crate::enums::TicketStatus;

/// Default number of tickets to keep in progress.
pub const MIN_ACTIVE_TICKETS: usize = 3;

/// Queue tickets split by status, each part in query order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueuePartition {
    pub in_progress: Vec<Ticket>,
    pub on_hold: Vec<Ticket>,
    pub to_do: Vec<Ticket>,
}

impl QueuePartition {
    /// Partition tickets by status. Tickets in any other status are dropped.
    #[must_use]
    pub fn from_tickets(tickets: impl IntoIterator<Item = Ticket>) -> Self {
        let mut partition = Self::default();
        for ticket in tickets {
            match ticket.status {
                TicketStatus::InProgress => partition.in_progress.push(ticket),
                TicketStatus::OnHold => partition.on_hold.push(ticket),
                TicketStatus::ToDo => partition.to_do.push(ticket),
                TicketStatus::Blocked | TicketStatus::Done | TicketStatus::Other(_) => {}
            }
        }
        partition
    }
}

/// Pool a promotion candidate was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionSource {
    OnHold,
    ToDo,
}

/// A ticket that should be transitioned to in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promotion {
    pub ticket: Ticket,
    pub source: PromotionSource,
}

impl Promotion {
    /// Status the tracker should move the ticket to.
    #[must_use]
    pub const fn target_status(&self) -> TicketStatus {
        TicketStatus::InProgress
    }
}

/// Result of executing a promotion against the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionOutcome {
    Succeeded,
    Failed,
}

/// Final state after rebalancing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RebalanceResult {
    /// At most `target` in-progress tickets: pre-existing ones first, then
    /// promoted ones in promotion order.
    pub active: Vec<Ticket>,
    /// Keys of tickets successfully promoted.
    pub promoted: Vec<String>,
    /// Keys of tickets whose promotion failed.
    pub failed: Vec<String>,
}

/// State machine driving promotions until enough tickets are in progress.
#[derive(Debug, Clone)]
pub struct Rebalancer {
    target: usize,
    active: Vec<Ticket>,
    on_hold: VecDeque<Ticket>,
    to_do: VecDeque<Ticket>,
    pending: Option<Promotion>,
    promoted: Vec<String>,
    failed: Vec<String>,
}

impl Rebalancer {
    #[must_use]
    pub fn new(partition: QueuePartition, target: usize) -> Self {
        Self {
            target,
            active: partition.in_progress,
            on_hold: partition.on_hold.into(),
            to_do: partition.to_do.into(),
            pending: None,
            promoted: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// The next ticket to promote, or `None` when the target is reached or
    /// no candidates remain.
    ///
    /// Until [`resolve`](Self::resolve) is called, repeated calls return the
    /// same pending promotion.
    pub fn next_promotion(&mut self) -> Option<&Promotion> {
        if self.pending.is_none() && self.active.len() < self.target {
            self.pending = self
                .on_hold
                .pop_front()
                .map(|ticket| Promotion {
                    ticket,
                    source: PromotionSource::OnHold,
                })
                .or_else(|| {
                    self.to_do.pop_front().map(|ticket| Promotion {
                        ticket,
                        source: PromotionSource::ToDo,
                    })
                });
        }
        self.pending.as_ref()
    }

    /// Record the outcome of the pending promotion.
    ///
    /// A failed ticket keeps its original status and is never offered again.
    /// Does nothing when no promotion is pending.
    pub fn resolve(&mut self, outcome: PromotionOutcome) {
        let Some(Promotion { mut ticket, .. }) = self.pending.take() else {
            return;
        };
        match outcome {
            PromotionOutcome::Succeeded => {
                ticket.status = TicketStatus::InProgress;
                self.promoted.push(ticket.key.clone());
                self.active.push(ticket);
            }
            PromotionOutcome::Failed => self.failed.push(ticket.key),
        }
    }

    /// Number of tickets currently counted as in progress.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Finish rebalancing. An unresolved pending promotion is discarded.
    #[must_use]
    pub fn finish(mut self) -> RebalanceResult {
        self.active.truncate(self.target);
        RebalanceResult {
            active: self.active,
            promoted: self.promoted,
            failed: self.failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn ticket(key: &str, status: TicketStatus) -> Ticket {
        Ticket::new(key, key, status, None, "https://j")
    }

    fn tickets(prefix: &str, n: usize, status: &TicketStatus) -> Vec<Ticket> {
        (1..=n)
            .map(|i| ticket(&format!("{prefix}-{i}"), status.clone()))
            .collect()
    }

    fn keys(tickets: &[Ticket]) -> Vec<&str> {
        tickets.iter().map(|t| t.key.as_str()).collect()
    }

    /// Drive the state machine, failing the promotions whose key is listed.
    fn run(partition: QueuePartition, failing: &[&str]) -> (RebalanceResult, Vec<Promotion>) {
        let mut rebalancer = Rebalancer::new(partition, MIN_ACTIVE_TICKETS);
        let mut attempts = Vec::new();
        while let Some(promotion) = rebalancer.next_promotion() {
            let promotion = promotion.clone();
            let outcome = if failing.contains(&promotion.ticket.key.as_str()) {
                PromotionOutcome::Failed
            } else {
                PromotionOutcome::Succeeded
            };
            attempts.push(promotion);
            rebalancer.resolve(outcome);
        }
        (rebalancer.finish(), attempts)
    }

    #[test]
    fn partition_keeps_query_order_and_drops_other_statuses() {
        let partition = QueuePartition::from_tickets(vec![
            ticket("T-1", TicketStatus::ToDo),
            ticket("P-1", TicketStatus::InProgress),
            ticket("H-1", TicketStatus::OnHold),
            ticket("B-1", TicketStatus::Blocked),
            ticket("T-2", TicketStatus::ToDo),
            ticket("R-1", TicketStatus::Other("In Review".into())),
        ]);
        assert_eq!(keys(&partition.in_progress), vec!["P-1"]);
        assert_eq!(keys(&partition.on_hold), vec!["H-1"]);
        assert_eq!(keys(&partition.to_do), vec!["T-1", "T-2"]);
    }

    #[test]
    fn one_in_progress_two_on_hold_promotes_both() {
        let partition = QueuePartition {
            in_progress: tickets("P", 1, &TicketStatus::InProgress),
            on_hold: tickets("H", 2, &TicketStatus::OnHold),
            to_do: vec![],
        };
        let (result, _) = run(partition, &[]);
        assert_eq!(keys(&result.active), vec!["P-1", "H-1", "H-2"]);
        assert_eq!(result.promoted, vec!["H-1", "H-2"]);
        assert!(
            result
                .active
                .iter()
                .all(|t| t.status == TicketStatus::InProgress)
        );
    }

    #[test]
    fn on_hold_is_exhausted_before_to_do() {
        let partition = QueuePartition {
            in_progress: vec![],
            on_hold: tickets("H", 1, &TicketStatus::OnHold),
            to_do: tickets("T", 3, &TicketStatus::ToDo),
        };
        let (result, attempts) = run(partition, &[]);
        let sources: Vec<_> = attempts.iter().map(|p| p.source).collect();
        assert_eq!(
            sources,
            vec![
                PromotionSource::OnHold,
                PromotionSource::ToDo,
                PromotionSource::ToDo
            ]
        );
        assert_eq!(keys(&result.active), vec!["H-1", "T-1", "T-2"]);
    }

    #[test]
    fn failed_promotion_keeps_status_and_continues() {
        let partition = QueuePartition {
            in_progress: vec![],
            on_hold: tickets("H", 2, &TicketStatus::OnHold),
            to_do: tickets("T", 2, &TicketStatus::ToDo),
        };
        let (result, attempts) = run(partition, &["H-1"]);
        assert_eq!(keys(&result.active), vec!["H-2", "T-1", "T-2"]);
        assert_eq!(result.failed, vec!["H-1"]);

        let failed = attempts.iter().find(|p| p.ticket.key == "H-1").unwrap();
        assert_eq!(failed.ticket.status, TicketStatus::OnHold);
        assert_eq!(attempts.iter().filter(|p| p.ticket.key == "H-1").count(), 1);
    }

    #[test]
    fn exhausted_candidates_accept_fewer_than_target() {
        let partition = QueuePartition {
            in_progress: vec![],
            on_hold: vec![],
            to_do: tickets("T", 2, &TicketStatus::ToDo),
        };
        let (result, _) = run(partition, &["T-2"]);
        assert_eq!(keys(&result.active), vec!["T-1"]);
        assert_eq!(result.failed, vec!["T-2"]);
    }

    #[test]
    fn surplus_in_progress_is_truncated_in_query_order() {
        let partition = QueuePartition {
            in_progress: tickets("P", 5, &TicketStatus::InProgress),
            on_hold: tickets("H", 1, &TicketStatus::OnHold),
            to_do: vec![],
        };
        let (result, attempts) = run(partition, &[]);
        assert!(attempts.is_empty());
        assert_eq!(keys(&result.active), vec!["P-1", "P-2", "P-3"]);
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(0, 1, 0)]
    #[case(0, 0, 5)]
    #[case(1, 2, 0)]
    #[case(2, 3, 3)]
    #[case(3, 2, 2)]
    #[case(4, 0, 1)]
    fn never_reduces_or_overshoots(
        #[case] in_progress: usize,
        #[case] on_hold: usize,
        #[case] to_do: usize,
    ) {
        let partition = QueuePartition {
            in_progress: tickets("P", in_progress, &TicketStatus::InProgress),
            on_hold: tickets("H", on_hold, &TicketStatus::OnHold),
            to_do: tickets("T", to_do, &TicketStatus::ToDo),
        };
        let (result, attempts) = run(partition, &[]);

        assert!(result.active.len() >= in_progress.min(MIN_ACTIVE_TICKETS));
        assert_eq!(
            result.active.len(),
            (in_progress + on_hold + to_do).min(MIN_ACTIVE_TICKETS)
        );
        assert_eq!(
            attempts.len(),
            MIN_ACTIVE_TICKETS
                .saturating_sub(in_progress)
                .min(on_hold + to_do)
        );
    }

    #[test]
    fn pending_promotion_is_stable_until_resolved() {
        let partition = QueuePartition {
            in_progress: vec![],
            on_hold: tickets("H", 2, &TicketStatus::OnHold),
            to_do: vec![],
        };
        let mut rebalancer = Rebalancer::new(partition, MIN_ACTIVE_TICKETS);
        let first = rebalancer.next_promotion().cloned();
        let again = rebalancer.next_promotion().cloned();
        assert_eq!(first, again);
        assert_eq!(
            first.map(|p| p.target_status()),
            Some(TicketStatus::InProgress)
        );
    }

    #[test]
    fn unresolved_promotion_is_discarded_on_finish() {
        let partition = QueuePartition {
            in_progress: vec![],
            on_hold: tickets("H", 1, &TicketStatus::OnHold),
            to_do: vec![],
        };
        let mut rebalancer = Rebalancer::new(partition, MIN_ACTIVE_TICKETS);
        assert!(rebalancer.next_promotion().is_some());
        let result = rebalancer.finish();
        assert!(result.active.is_empty());
        assert!(result.promoted.is_empty());
    }

    #[test]
    fn resolve_without_pending_is_a_no_op() {
        let mut rebalancer = Rebalancer::new(QueuePartition::default(), MIN_ACTIVE_TICKETS);
        rebalancer.resolve(PromotionOutcome::Succeeded);
        assert_eq!(rebalancer.active_count(), 0);
    }
}
