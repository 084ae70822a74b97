//! General run configuration.

use serde::{Deserialize, Serialize};

/// Default per-request timeout.
const fn default_http_timeout_secs() -> u64 {
    30
}

/// Default number of tickets kept in progress.
const fn default_min_active_tickets() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Timeout applied to every outbound HTTP request, in seconds.
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,

    /// Tickets the rebalancer keeps in progress.
    #[serde(default = "default_min_active_tickets")]
    pub min_active_tickets: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            http_timeout_secs: default_http_timeout_secs(),
            min_active_tickets: default_min_active_tickets(),
        }
    }
}
