//! # Settings Endpoints
//!
//! Profile updates: general info (name + email) and password.

use shared::{UpdateGeneralInfoRequest, UpdateGeneralInfoResponse, UpdatePasswordRequest, UpdateUserInfoDto};

use super::client::UserServiceClient;
use crate::core::error::Result;

impl UserServiceClient {
    /// Update the session user's name and email.
    ///
    /// Failures carry the server's `error` message when it sent one.
    #[tracing::instrument(skip_all)]
    pub async fn update_general_info(&self, name: &str, email: &str) -> Result<UpdateUserInfoDto> {
        self.post_general_info(name, email).await.inspect_err(|e| {
            tracing::error!(error = %e, "Error updating general info");
        })
    }

    async fn post_general_info(&self, name: &str, email: &str) -> Result<UpdateUserInfoDto> {
        let url = self.endpoint(&["api", "settings", "general"])?;
        let body = UpdateGeneralInfoRequest {
            name: name.to_string(),
            email: email.to_string(),
        };
        let response = self.send(self.post(url).json(&body)).await?;

        if !response.status().is_success() {
            return Err(Self::server_error(response, "Failed to update general info.").await);
        }

        let UpdateGeneralInfoResponse { user } = response.json::<UpdateGeneralInfoResponse>().await?;
        tracing::info!("General info updated");
        Ok(user)
    }

    /// Update the session user's password. Returns `false` on failure.
    pub async fn update_password(&self, password1: &str, password2: &str) -> bool {
        match self.try_update_password(password1, password2).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "Error updating password");
                false
            }
        }
    }

    /// The success body must still be JSON; it is parsed and discarded.
    #[tracing::instrument(skip_all)]
    pub async fn try_update_password(&self, password1: &str, password2: &str) -> Result<()> {
        let url = self.endpoint(&["api", "settings", "password"])?;
        let body = UpdatePasswordRequest {
            password1: password1.to_string(),
            password2: password2.to_string(),
        };
        let response = self.send(self.post(url).json(&body)).await?;

        if !response.status().is_success() {
            return Err(Self::server_error(response, "Failed to update password.").await);
        }

        response.json::<serde_json::Value>().await?;
        tracing::info!("Password updated");
        Ok(())
    }
}
