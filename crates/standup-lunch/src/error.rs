//! Lunch source error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LunchError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// TheMealDB returned a non-success status code.
    #[error("API error ({status})")]
    Api { status: u16 },

    /// The response contained no meal.
    #[error("no meal in response")]
    NoMeal,
}
