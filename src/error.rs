// Typed failures at the HTTP boundary. Everything else in the app uses anyhow.

use thiserror::Error;

/// Why a schedule fetch failed. Carries rendered messages rather than the
/// underlying error values so it can travel inside a cloneable `Action`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body-read failure.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status code.
    #[error("server responded with HTTP {0}")]
    Status(u16),

    /// The body was not a JSON list of prayer records.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None => FetchError::Transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
