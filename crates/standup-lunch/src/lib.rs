//! # standup-lunch
//!
//! Picks a random meal from TheMealDB for the report's lunch section.

mod error;

pub use error::LunchError;

use std::time::Duration;

use serde::Deserialize;
use standup_config::LunchConfig;
use standup_core::entities::LunchSuggestion;

#[derive(Debug, Deserialize)]
struct RandomResponse {
    #[serde(default)]
    meals: Option<Vec<Meal>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Meal {
    str_meal: String,
    #[serde(default)]
    str_source: Option<String>,
}

impl From<Meal> for LunchSuggestion {
    fn from(meal: Meal) -> Self {
        Self {
            name: meal.str_meal,
            recipe_url: meal.str_source.filter(|url| !url.trim().is_empty()),
        }
    }
}

/// HTTP client for TheMealDB.
pub struct LunchClient {
    http: reqwest::Client,
    api_base: String,
}

impl LunchClient {
    /// # Errors
    ///
    /// Returns [`LunchError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &LunchConfig, timeout: Duration) -> Result<Self, LunchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("standup/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one random meal.
    ///
    /// # Errors
    ///
    /// Returns [`LunchError`] on transport failure, a non-success status, or
    /// a response without meals.
    pub async fn random_meal(&self) -> Result<LunchSuggestion, LunchError> {
        let url = format!("{}/random.php", self.api_base);
        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(LunchError::Api {
                status: resp.status().as_u16(),
            });
        }
        let data: RandomResponse = resp.json().await?;
        data.meals
            .and_then(|meals| meals.into_iter().next())
            .map(LunchSuggestion::from)
            .ok_or(LunchError::NoMeal)
    }

    /// A lunch suggestion that is always available. Any failure is logged
    /// and replaced by [`LunchSuggestion::placeholder`].
    pub async fn suggest_lunch(&self) -> LunchSuggestion {
        self.random_meal().await.unwrap_or_else(|error| {
            tracing::error!(%error, "failed to fetch a random meal");
            LunchSuggestion::placeholder()
        })
    }
}
