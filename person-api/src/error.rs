//! Error types for the person API.

use thiserror::Error;

/// Result type alias for person API operations.
pub type PersonApiResult<T> = Result<T, PersonApiError>;

/// Errors that can occur while fetching or decoding a person.
#[derive(Debug, Error)]
pub enum PersonApiError {
    /// The request target could not be built into a valid URL.
    #[error("Invalid endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Connectivity, timeout or body read failure.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The response carried no body.
    #[error("Empty response body")]
    EmptyBody,

    /// The body is not valid JSON.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body is JSON but not an object.
    #[error("Expected a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },

    #[error("Configuration error: {0}")]
    Configuration(String)
}

impl PersonApiError {
    /// True when the failure happened before any body was examined.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::InvalidEndpoint { .. } | Self::Transport(_) | Self::Status { .. }
        )
    }

    /// True when a body was received but could not be turned into a person.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            Self::EmptyBody | Self::Decode(_) | Self::NotAnObject { .. }
        )
    }
}
