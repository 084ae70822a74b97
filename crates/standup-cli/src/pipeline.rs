//! One report run: query, classify, rebalance, assemble, deliver.
//!
//! Every remote call is awaited before the next one starts. Each section is
//! guarded separately: a failing query leaves its section empty, a failing
//! promotion drops that ticket, and a failing lunch lookup falls back to a
//! placeholder. An unconfigured tracker leaves all three ticket sections
//! empty. The report is always assembled and a delivery attempted.

use std::time::Duration;

use anyhow::Context;
use standup_config::StandupConfig;
use standup_core::classify::classify_all;
use standup_core::entities::{Report, Ticket};
use standup_core::rebalance::{PromotionOutcome, QueuePartition, Rebalancer};
use standup_core::window::ActivityWindow;
use standup_jira::JiraClient;
use standup_lunch::LunchClient;
use standup_slack::{SlackClient, render_report};

/// Clients and settings for a run. `jira` is `None` when the tracker
/// section is not usable.
pub struct Services {
    pub jira: Option<JiraClient>,
    pub slack: SlackClient,
    pub lunch: LunchClient,
    pub min_active_tickets: usize,
}

impl Services {
    /// Build every client the configuration allows.
    ///
    /// # Errors
    ///
    /// Fails only when the report cannot be delivered: the Slack section is
    /// incomplete or an HTTP client cannot be built.
    pub fn from_config(config: &StandupConfig) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(config.general.http_timeout_secs);
        config.slack.validate()?;
        let jira = match config.jira.validate() {
            Ok(()) => Some(
                JiraClient::new(&config.jira, timeout).context("failed to build Jira client")?,
            ),
            Err(error) => {
                tracing::error!(%error, "tracker sections will be empty");
                None
            }
        };
        Ok(Self {
            jira,
            slack: SlackClient::new(&config.slack, timeout)
                .context("failed to build Slack client")?,
            lunch: LunchClient::new(&config.lunch, timeout)
                .context("failed to build lunch client")?,
            min_active_tickets: config.general.min_active_tickets,
        })
    }
}

/// Build the report and post it. Returns whether delivery succeeded.
pub async fn run(services: &Services, window: &ActivityWindow) -> bool {
    let report = build_report(services, window).await;
    deliver(&services.slack, &report).await
}

/// Assemble the report from all sources.
pub async fn build_report(services: &Services, window: &ActivityWindow) -> Report {
    let mut report = Report::new();

    if let Some(jira) = &services.jira {
        for ticket in previous_work(jira, window).await {
            report.add_previous(ticket);
        }
        for ticket in next_work(jira, services.min_active_tickets).await {
            report.add_next(ticket);
        }
        for ticket in blocked_work(jira).await {
            report.add_blocked(ticket);
        }
    }
    report.set_lunch(services.lunch.suggest_lunch().await);

    tracing::info!(
        previous = report.previous().len(),
        next = report.next().len(),
        blocked = report.blocked().len(),
        "report assembled"
    );
    report
}

async fn previous_work(jira: &JiraClient, window: &ActivityWindow) -> Vec<Ticket> {
    match jira.recently_touched(window).await {
        Ok(records) => classify_all(records, window, jira.owner()),
        Err(error) => {
            tracing::error!(%error, "failed to fetch recently touched tickets");
            Vec::new()
        }
    }
}

async fn next_work(jira: &JiraClient, min_active_tickets: usize) -> Vec<Ticket> {
    let queue = match jira.work_queue().await {
        Ok(queue) => queue,
        Err(error) => {
            tracing::error!(%error, "failed to fetch tickets for the next work session");
            return Vec::new();
        }
    };

    let mut rebalancer = Rebalancer::new(QueuePartition::from_tickets(queue), min_active_tickets);
    while let Some(promotion) = rebalancer.next_promotion() {
        let key = promotion.ticket.key.clone();
        let target = promotion.target_status();
        let outcome = match jira.transition(&key, &target).await {
            Ok(()) => PromotionOutcome::Succeeded,
            Err(error) => {
                tracing::error!(%key, %error, "failed to update ticket status");
                PromotionOutcome::Failed
            }
        };
        rebalancer.resolve(outcome);
    }

    let result = rebalancer.finish();
    tracing::debug!(
        promoted = ?result.promoted,
        failed = ?result.failed,
        "work queue rebalanced"
    );
    result.active
}

async fn blocked_work(jira: &JiraClient) -> Vec<Ticket> {
    jira.blocked().await.unwrap_or_else(|error| {
        tracing::error!(%error, "failed to fetch blocked tickets");
        Vec::new()
    })
}

async fn deliver(slack: &SlackClient, report: &Report) -> bool {
    let blocks = render_report(report);
    match slack.post_report(&blocks).await {
        Ok(()) => true,
        Err(error) => {
            tracing::error!(%error, "failed to send message to Slack");
            false
        }
    }
}
