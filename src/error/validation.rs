use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported URL scheme '{scheme}'. Use http or https.")]
    UnsupportedScheme { scheme: String },
    #[error("Request count must be > 0.")]
    RequestsZero,
    #[error("Concurrency must be > 0.")]
    ConcurrencyZero,
    #[error("Timeout must be > 0 ms.")]
    TimeoutZero,
    #[error("Invalid JSON body: {source}")]
    InvalidBody {
        #[source]
        source: serde_json::Error,
    },
    #[error("{message}")]
    Message { message: String },
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        ValidationError::Message { message }
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        ValidationError::Message {
            message: message.to_owned(),
        }
    }
}
