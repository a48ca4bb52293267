//! Upstream error definitions.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the upstream employee service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream answered 404.
    #[error("upstream resource not found")]
    NotFound,

    /// Upstream rejected the payload with 400.
    #[error("upstream rejected the request")]
    BadRequest,

    /// Upstream answered 429 or any 5xx.
    #[error("upstream unavailable or rate limited: {0}")]
    Throttled(StatusCode),

    /// Any other non-success status.
    #[error("unexpected upstream status: {0}")]
    Status(StatusCode),

    /// Connection, TLS or body read failure.
    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body was not the expected JSON envelope.
    #[error("malformed upstream payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot address an employee.
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(String),
}

impl UpstreamError {
    /// Map a non-success upstream status to an error.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::NOT_FOUND => UpstreamError::NotFound,
            StatusCode::BAD_REQUEST => UpstreamError::BadRequest,
            StatusCode::TOO_MANY_REQUESTS => UpstreamError::Throttled(status),
            s if s.is_server_error() => UpstreamError::Throttled(s),
            s => UpstreamError::Status(s),
        }
    }
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
