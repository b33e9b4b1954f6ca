//! # Settings Data Transfer Objects
//!
//! Profile settings updates: general info (name + email) and password.

use serde::{Deserialize, Serialize};

/// General info update request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateGeneralInfoRequest {
    pub name: String,
    pub email: String,
}

/// Updated user info returned after a general info update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateUserInfoDto {
    pub name: String,
    pub email: String,
}

/// `POST /api/settings/general/` envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGeneralInfoResponse {
    pub user: UpdateUserInfoDto,
}

/// Password update request (new password and its confirmation)
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdatePasswordRequest {
    pub password1: String,
    pub password2: String,
}

// Passwords stay out of logs and panic messages
impl std::fmt::Debug for UpdatePasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdatePasswordRequest")
            .field("password1", &"***")
            .field("password2", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_request_debug_is_redacted() {
        let request = UpdatePasswordRequest {
            password1: "hunter2".to_string(),
            password2: "hunter2".to_string(),
        };
        let rendered = format!("{:?}", request);
        assert!(!rendered.contains("hunter2"));
    }
}
