use chrono::NaiveDate;
use thiserror::Error;

pub type RoasResult<T> = Result<T, RoasError>;

#[derive(Error, Debug)]
pub enum RoasError {
    #[error("Invalid signal threshold: green ({green}) must exceed yellow ({yellow}) and yellow must be >= 0")]
    InvalidThreshold { green: f64, yellow: f64 },

    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Creative lookup error: {0}")]
    Creative(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<config::ConfigError> for RoasError {
    fn from(err: config::ConfigError) -> Self {
        RoasError::Config(err.to_string())
    }
}
