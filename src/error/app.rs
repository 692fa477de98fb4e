use thiserror::Error;

use super::ValidationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("HTTP client error: {source}")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },
    #[error("Join error: {source}")]
    Join {
        #[from]
        source: tokio::task::JoinError,
    },
    #[error("{source}")]
    Validation {
        #[from]
        source: ValidationError,
    },
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation(source: impl Into<ValidationError>) -> Self {
        AppError::Validation {
            source: source.into(),
        }
    }
}
