use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThingError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("no thing named '{name}'")]
    NotFound { name: String },

    #[error("expected one thing named '{name}', found {count}")]
    TooManyRows { name: String, count: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}
