//! Slack notifier configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::first_missing;

/// Default Slack Web API endpoint.
fn default_api_base() -> String {
    String::from("https://slack.com/api")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SlackConfig {
    /// Bot token (`xoxb-...`).
    #[serde(default)]
    pub bot_token: String,

    /// Channel the report is posted to.
    #[serde(default)]
    pub channel_id: String,

    /// Web API base URL.
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            channel_id: String::new(),
            api_base: default_api_base(),
        }
    }
}

impl SlackConfig {
    /// Check that the report can be delivered with this section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first empty credential.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            (&self.bot_token, "SLACK_BOT_TOKEN"),
            (&self.channel_id, "SLACK_CHANNEL_ID"),
        ];
        match first_missing(&required) {
            Some(variable) => Err(ConfigError::Missing {
                section: "slack",
                variable,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_missing_the_bot_token() {
        let config = SlackConfig::default();
        assert_eq!(config.api_base, "https://slack.com/api");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Missing { section: "slack", variable: "SLACK_BOT_TOKEN" })
        ));
    }

    #[test]
    fn missing_channel_names_its_variable() {
        let config = SlackConfig {
            bot_token: "xoxb-1".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Missing { variable: "SLACK_CHANNEL_ID", .. })
        ));
    }
}
