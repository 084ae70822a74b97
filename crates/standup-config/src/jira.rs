//! Jira tracker configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::first_missing;

/// Default page size for issue searches.
const fn default_max_results() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JiraConfig {
    /// Instance base URL (e.g., `https://acme.atlassian.net`).
    #[serde(default)]
    pub base_url: String,

    /// Account used for basic auth. Also the identity matched against
    /// comment and history authors.
    #[serde(default)]
    pub username: String,

    /// API token paired with `username`.
    #[serde(default)]
    pub api_token: String,

    /// `maxResults` sent with every search.
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            username: String::new(),
            api_token: String::new(),
            max_results: default_max_results(),
        }
    }
}

impl JiraConfig {
    /// Check that the tracker client can be built from this section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first empty credential,
    /// or [`ConfigError::InvalidValue`] when `base_url` is not an http(s)
    /// URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            (&self.base_url, "JIRA_BASE_URL"),
            (&self.username, "JIRA_USERNAME"),
            (&self.api_token, "JIRA_API_TOKEN"),
        ];
        if let Some(variable) = first_missing(&required) {
            return Err(ConfigError::Missing {
                section: "jira",
                variable,
            });
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "jira.base_url",
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> JiraConfig {
        JiraConfig {
            base_url: "https://acme.atlassian.net".into(),
            username: "alvis".into(),
            api_token: "tok".into(),
            ..Default::default()
        }
    }

    #[test]
    fn default_names_the_base_url_variable() {
        let config = JiraConfig::default();
        assert_eq!(config.max_results, 50);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Missing { section: "jira", variable: "JIRA_BASE_URL" })
        ));
    }

    #[test]
    fn all_credentials_validate() {
        assert!(configured().validate().is_ok());
    }

    #[test]
    fn missing_token_names_its_variable() {
        let config = JiraConfig {
            api_token: "  ".into(),
            ..configured()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Missing { variable: "JIRA_API_TOKEN", .. }));
        assert!(err.to_string().contains("JIRA_API_TOKEN"));
    }

    #[test]
    fn bare_host_is_not_a_valid_base_url() {
        let config = JiraConfig {
            base_url: "acme.atlassian.net".into(),
            ..configured()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "jira.base_url", .. })
        ));
    }
}
