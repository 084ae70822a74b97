//! # standup-config
//!
//! Layered configuration loading for standup using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STANDUP_*` prefix, `__` as separator)
//! 2. Plain tracker/chat variables: `JIRA_BASE_URL`, `JIRA_USERNAME`,
//!    `JIRA_API_TOKEN`, `SLACK_BOT_TOKEN`, `SLACK_CHANNEL_ID`
//! 3. Project-level `./standup.toml`
//! 4. User-level `~/.config/standup/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `STANDUP_JIRA__BASE_URL` -> `jira.base_url`,
//! `STANDUP_GENERAL__MIN_ACTIVE_TICKETS` -> `general.min_active_tickets`, etc.
//! The plain variables map by their first underscore: `SLACK_CHANNEL_ID` ->
//! `slack.channel_id`.
//!
//! # Usage
//!
//! ```no_run
//! use standup_config::StandupConfig;
//!
//! // Reads `.env` and merges every source.
//! let config = StandupConfig::load_with_dotenv().expect("config");
//! println!("Reporting for {}", config.jira.username);
//! ```

mod error;
mod general;
mod jira;
mod lunch;
mod slack;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use jira::JiraConfig;
pub use lunch::LunchConfig;
pub use slack::SlackConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Unprefixed variables accepted for the tracker and chat credentials.
const PLAIN_ENV_VARS: &[&str] = &[
    "JIRA_BASE_URL",
    "JIRA_USERNAME",
    "JIRA_API_TOKEN",
    "SLACK_BOT_TOKEN",
    "SLACK_CHANNEL_ID",
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StandupConfig {
    #[serde(default)]
    pub jira: JiraConfig,
    #[serde(default)]
    pub slack: SlackConfig,
    #[serde(default)]
    pub lunch: LunchConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl StandupConfig {
    /// Load configuration from all sources.
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading. Credentials are not checked here:
    /// each client validates its own section with [`JiraConfig::validate`]
    /// or [`SlackConfig::validate`], so one missing section does not stop
    /// the others.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be read, and
    /// [`ConfigError::InvalidValue`] if the general settings are unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Reads `.env` from the current directory (if present) before building
    /// the figment. This is the entry point for the binary.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from("standup.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Plain credential variables
        figment = figment.merge(
            Env::raw()
                .only(PLAIN_ENV_VARS)
                .map(|key| key.as_str().to_ascii_lowercase().replacen('_', ".", 1).into()),
        );

        // Layer 4: Prefixed environment variables (highest priority)
        figment.merge(Env::prefixed("STANDUP_").split("__"))
    }

    /// Check the settings shared by every component.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero HTTP timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.http_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.http_timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("standup").join("config.toml"))
    }
}

/// Variable name of the first blank value in `required`.
fn first_missing(required: &[(&String, &'static str)]) -> Option<&'static str> {
    required
        .iter()
        .find(|(value, _)| value.trim().is_empty())
        .map(|(_, variable)| *variable)
}
