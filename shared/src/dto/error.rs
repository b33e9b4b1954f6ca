//! # Error Body DTO
//!
//! `{"error": "..."}` body some endpoints return alongside a non-success status.

use serde::{Deserialize, Serialize};

/// Error body returned by the backend on a failed request.
///
/// The backend does not always include a message, so `error` is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Server-supplied message, if the body carried a non-empty one.
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().filter(|msg| !msg.is_empty())
    }

    /// Server-supplied message, or `fallback` when the body carried none.
    pub fn message_or(self, fallback: &str) -> String {
        self.error
            .filter(|msg| !msg.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}
