//! Places autocomplete error types

use thiserror::Error;

/// Errors raised by an [`HttpTransport`](crate::HttpTransport)
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection to the remote host failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request failed before a response was received
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Request timeout
    #[error("Request timed out")]
    Timeout,
}

/// Errors that can occur during places autocomplete operations
///
/// Messages may carry the request URL for diagnostics. The `key` parameter
/// is always redacted before a URL ends up here.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// The caller asked for something the API does not support, or the API
    /// flagged the request itself as invalid
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The API rejected the key
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// The response could not be decoded, or access was denied for a reason
    /// other than a bad key
    #[error("Invalid server response: {0}")]
    InvalidServerResponse(String),

    /// Daily or per-second quota exhausted
    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Transport-level failure, passed through untouched
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The HTTP transport could not be built
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl PlacesError {
    /// Returns true if a caller may reasonably retry the request later
    ///
    /// The client itself never retries.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::QuotaExceeded(_))
    }
}
