//! # User Endpoints
//!
//! User lookup by username.

use shared::User;

use super::client::UserServiceClient;
use crate::core::error::{ClientError, Result};

impl UserServiceClient {
    /// Look up a user by username.
    ///
    /// Any non-success status yields `"User not found"`; the body is returned
    /// unchanged otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn get_user_by_username(&self, username: &str) -> Result<User> {
        let url = self.endpoint(&["api", "users", username])?;
        let response = self.send(self.get(url)).await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "User lookup failed");
            return Err(ClientError::status(status.as_u16(), "User not found"));
        }

        Ok(response.json::<User>().await?)
    }
}
