use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A credential a component needs is empty. `variable` is the plain
    /// environment variable that supplies it.
    #[error("{section} is not configured: set {variable} (or the matching STANDUP_ variable)")]
    Missing {
        section: &'static str,
        variable: &'static str,
    },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
