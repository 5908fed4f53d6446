/*
[INPUT]:  Error sources (HTTP, API envelope, serialization, deadlines, cancellation)
[OUTPUT]: Structured error type shared by transport and endpoint wrappers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Paystack adapter
#[derive(Error, Debug)]
pub enum PaystackError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response or a `status: false` envelope
    #[error("API error (code {code}): {message}")]
    Api { code: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Per-call deadline elapsed
    #[error("Request timed out after {duration:?}")]
    Timeout { duration: Duration },

    /// Call was cancelled by the caller
    #[error("Request cancelled")]
    Cancelled,
}

impl PaystackError {
    /// Check if the remote API rejected the call
    pub fn is_api_error(&self) -> bool {
        matches!(self, PaystackError::Api { .. })
    }

    /// HTTP status reported by the remote API, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PaystackError::Api { code, .. } => Some(*code),
            PaystackError::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        PaystackError::Api {
            code: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for Paystack operations
pub type Result<T> = std::result::Result<T, PaystackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = PaystackError::api_error(StatusCode::BAD_REQUEST, "Invalid transaction reference");
        match err {
            PaystackError::Api { code, message } => {
                assert_eq!(code, 400);
                assert_eq!(message, "Invalid transaction reference");
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_status_code() {
        let err = PaystackError::api_error(StatusCode::UNAUTHORIZED, "Invalid key");
        assert!(err.is_api_error());
        assert_eq!(err.status_code(), Some(401));

        assert!(!PaystackError::Cancelled.is_api_error());
        assert_eq!(PaystackError::Cancelled.status_code(), None);
    }

    #[test]
    fn test_timeout_display() {
        let err = PaystackError::Timeout {
            duration: Duration::from_millis(250),
        };
        assert_eq!(err.to_string(), "Request timed out after 250ms");
    }
}
