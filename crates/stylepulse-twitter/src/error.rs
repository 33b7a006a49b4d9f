use thiserror::Error;

/// Errors returned by the Twitter API client.
#[derive(Debug, Error)]
pub enum TwitterError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Credentials were rejected (401/403) or the token exchange failed.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The search endpoint returned 429.
    #[error("rate limited by Twitter API (resets at {reset_at:?})")]
    RateLimited { reset_at: Option<i64> },

    /// Any other non-2xx status, with the first message from the error envelope.
    #[error("Twitter API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A status carried a `created_at` value that is not in Twitter's format.
    #[error("invalid created_at '{value}' on tweet {id}")]
    InvalidTimestamp { id: String, value: String },

    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}
