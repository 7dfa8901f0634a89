//! Client error types.

use gocardless_core::{ApiError, CoreError};

/// Errors that can occur when using the GoCardless client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with 429 Too Many Requests.
    #[error("rate limit exceeded")]
    RateLimitExceeded,

    /// The request method is not allowed by this client.
    #[error("the request method is invalid: {0}")]
    InvalidMethod(String),

    /// The API returned a status other than the one the operation expects.
    #[error("API error: status {status}: {}", describe(.error))]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error decoded from the response body, if it had the expected shape.
        error: Option<ApiError>,
    },

    /// A request or response body could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The operation needs a customer identifier and none was given.
    #[error("customer has no id")]
    MissingId,

    /// The customer identifier cannot be used as a URL path segment.
    #[error("invalid customer id: {0}")]
    InvalidId(String),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl ClientError {
    /// The decoded API error, when this is an [`ClientError::Api`] with a body.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { error, .. } => error.as_ref(),
            _ => None,
        }
    }

    /// Whether this error signals throttling.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimitExceeded)
    }
}

fn describe(error: &Option<ApiError>) -> String {
    error
        .as_ref()
        .map_or_else(|| "no error details available".to_string(), ToString::to_string)
}
