//! # Common Error Types
//!
//! Consolidated error handling for the user service client.
//!
//! ## Error Categories
//!
//! - **Network**: the request never produced a response (connection refused, DNS, body read)
//! - **Status**: the backend answered with a non-2xx status
//! - **Server**: the backend answered with a non-2xx status and an `error` message
//! - **Decode**: a 2xx response whose body does not match the expected shape
//! - **Config**: invalid configuration (base URL, HTTP client build)
//!
//! Callers are not expected to branch on the category: the `Display` text is
//! the message that matters, and every variant means "request failed".
//!
//! ## Usage Pattern
//!
//! ```rust
//! use client::core::error::ClientError;
//!
//! let err = ClientError::status(404, "User not found");
//! assert_eq!(err.to_string(), "User not found");
//! assert_eq!(err.status_code(), Some(404));
//! ```

use thiserror::Error;

/// Client-wide error type covering every way a backend call can fail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// Transport failure: no usable response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status with a client-chosen message.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Non-success HTTP status where the backend supplied the message.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        ClientError::Status {
            status,
            message: message.into(),
        }
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        ClientError::Server {
            status,
            message: message.into(),
        }
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } | ClientError::Server { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::Config(format!("invalid URL: {}", err))
    }
}
