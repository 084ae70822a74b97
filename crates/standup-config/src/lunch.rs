//! Lunch suggestion source configuration.

use serde::{Deserialize, Serialize};

fn default_api_base() -> String {
    String::from("https://www.themealdb.com/api/json/v1/1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LunchConfig {
    /// TheMealDB API base URL.
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

impl Default for LunchConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
        }
    }
}
