//! # standup-jira
//!
//! Jira REST v2 client for standup.
//!
//! Read path: issue searches over JQL (see [`IssueQuery`]) returning
//! [`IssueRecord`]s. Write path: moving a ticket to a new status through its
//! workflow transitions. Every call is a single attempt; callers decide how
//! to degrade on failure.

mod error;
mod http;
mod jql;
mod wire;

pub use error::JiraError;
pub use jql::{IssueQuery, REPORT_FIELDS};

use std::time::Duration;

use standup_config::JiraConfig;
use standup_core::entities::{IssueRecord, Ticket};
use standup_core::enums::TicketStatus;
use standup_core::window::ActivityWindow;

use crate::http::check_response;
use crate::wire::{SearchResponse, TransitionsResponse};

/// HTTP client for one Jira instance, authenticated as the report owner.
pub struct JiraClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    api_token: String,
    max_results: u32,
}

impl JiraClient {
    /// Create a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError::Http`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn new(config: &JiraConfig, timeout: Duration) -> Result<Self, JiraError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("standup/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            api_token: config.api_token.clone(),
            max_results: config.max_results,
        })
    }

    /// Identity the report is produced for.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.username
    }

    /// Run a search and convert each issue into an [`IssueRecord`].
    ///
    /// Issues whose activity timestamps cannot be read are logged and
    /// skipped; the rest of the result is kept.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError`] if the request fails, Jira returns a
    /// non-success status, or the body is not a search response.
    pub async fn search(&self, query: &IssueQuery) -> Result<Vec<IssueRecord>, JiraError> {
        let url = format!("{}/rest/api/2/search", self.base_url);
        let max_results = self.max_results.to_string();
        let mut params = vec![
            ("jql", query.jql.as_str()),
            ("fields", query.fields),
            ("maxResults", max_results.as_str()),
        ];
        if query.expand_changelog {
            params.push(("expand", "changelog"));
        }

        tracing::debug!(jql = %query.jql, "searching issues");
        let resp = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.api_token))
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&params)
            .send()
            .await?;
        let data: SearchResponse = check_response(resp).await?.json().await?;

        let records = data
            .issues
            .into_iter()
            .filter_map(|issue| {
                let key = issue.key.clone();
                match issue.into_record(&self.base_url) {
                    Ok(record) => Some(record),
                    Err(error) => {
                        tracing::warn!(%key, %error, "skipping unreadable issue");
                        None
                    }
                }
            })
            .collect();
        Ok(records)
    }

    /// Tickets touched inside `window`, with comments and change history.
    ///
    /// # Errors
    ///
    /// See [`search`](Self::search).
    pub async fn recently_touched(
        &self,
        window: &ActivityWindow,
    ) -> Result<Vec<IssueRecord>, JiraError> {
        self.search(&IssueQuery::recently_touched(window)).await
    }

    /// The work queue in priority, then due-date order.
    ///
    /// # Errors
    ///
    /// See [`search`](Self::search).
    pub async fn work_queue(&self) -> Result<Vec<Ticket>, JiraError> {
        Ok(into_tickets(self.search(&IssueQuery::work_queue()).await?))
    }

    /// Blocked tickets.
    ///
    /// # Errors
    ///
    /// See [`search`](Self::search).
    pub async fn blocked(&self) -> Result<Vec<Ticket>, JiraError> {
        Ok(into_tickets(self.search(&IssueQuery::blocked()).await?))
    }

    /// Move `key` to `target` through the first workflow transition whose
    /// destination name equals the target's canonical name exactly.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError::NoMatchingTransition`] without writing anything
    /// when no transition leads to `target`, or any transport/API error from
    /// either request.
    pub async fn transition(&self, key: &str, target: &TicketStatus) -> Result<(), JiraError> {
        let url = format!(
            "{}/rest/api/2/issue/{}/transitions",
            self.base_url,
            urlencoding::encode(key)
        );
        let status_name = target.canonical_name();

        let resp = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.api_token))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let available: TransitionsResponse = check_response(resp).await?.json().await?;

        let transition_id = available
            .transitions
            .into_iter()
            .find(|t| t.to.name == status_name)
            .map(|t| t.id)
            .ok_or_else(|| JiraError::NoMatchingTransition {
                key: key.to_string(),
                status: status_name.to_string(),
            })?;

        let body = serde_json::json!({ "transition": { "id": transition_id } });
        let resp = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(&self.api_token))
            .json(&body)
            .send()
            .await?;
        check_response(resp).await?;

        tracing::info!(%key, status = status_name, "ticket status updated");
        Ok(())
    }
}

fn into_tickets(records: Vec<IssueRecord>) -> Vec<Ticket> {
    records.into_iter().map(|record| record.ticket).collect()
}
