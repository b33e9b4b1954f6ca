//! # Friend Management Endpoints
//!
//! Friends list and the friend-request workflow. Sending, accepting and
//! rejecting report failure as `false`; the `try_*` variants keep the error.

use shared::{Friend, FriendRequest, FriendRequestsResponse, FriendsResponse, SendFriendRequestRequest};

use super::client::UserServiceClient;
use crate::core::error::{ClientError, Result};

/// Transition a pending friend request can be moved through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FriendRequestAction {
    Accept,
    Reject,
}

impl FriendRequestAction {
    fn path_segment(self) -> &'static str {
        match self {
            FriendRequestAction::Accept => "accept",
            FriendRequestAction::Reject => "reject",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            FriendRequestAction::Accept => "Failed to accept friend request",
            FriendRequestAction::Reject => "Failed to reject friend request",
        }
    }
}

impl UserServiceClient {
    /// Send a friend request to another user.
    ///
    /// Returns `false` on any failure; the cause is dropped.
    pub async fn send_friend_request(&self, receiver_id: i64) -> bool {
        match self.try_send_friend_request(receiver_id).await {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(receiver_id, error = %e, "Friend request not sent");
                false
            }
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn try_send_friend_request(&self, receiver_id: i64) -> Result<()> {
        let url = self.endpoint(&["api", "friend-request", "send"])?;
        let request = self.post(url).json(&SendFriendRequestRequest { receiver_id });
        let response = self.send(request).await?;

        if !response.status().is_success() {
            return Err(Self::server_error(response, "Failed to send friend request").await);
        }

        Ok(())
    }

    /// Get friends, filtered by `username` unless it is empty.
    #[tracing::instrument(skip(self))]
    pub async fn get_friends(&self, username: &str) -> Result<Vec<Friend>> {
        self.fetch_friends(username).await.inspect_err(|e| {
            tracing::error!(error = %e, "Error fetching friends");
        })
    }

    async fn fetch_friends(&self, username: &str) -> Result<Vec<Friend>> {
        let url = self.friends_url(username)?;
        let response = self.send(self.get(url)).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::status(status.as_u16(), "Failed to fetch friends"));
        }

        let body = response.json::<FriendsResponse>().await?;
        Ok(body.friends)
    }

    pub(crate) fn friends_url(&self, username: &str) -> Result<url::Url> {
        let mut url = self.endpoint(&["api", "friends"])?;
        if !username.is_empty() {
            url.query_pairs_mut().append_pair("username", username);
        }
        Ok(url)
    }

    /// Get friend requests addressed to the session user.
    #[tracing::instrument(skip(self))]
    pub async fn get_friend_requests(&self) -> Result<Vec<FriendRequest>> {
        self.fetch_friend_requests().await.inspect_err(|e| {
            tracing::error!(error = %e, "Error fetching friend requests");
        })
    }

    async fn fetch_friend_requests(&self) -> Result<Vec<FriendRequest>> {
        let url = self.endpoint(&["api", "friend-requests"])?;
        let response = self.send(self.get(url)).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::status(status.as_u16(), "Failed to fetch friend requests"));
        }

        let body = response.json::<FriendRequestsResponse>().await?;
        Ok(body.requests)
    }

    /// Accept a friend request. Returns `false` on failure.
    pub async fn accept_friend_request(&self, request_id: i64) -> bool {
        self.resolve_friend_request(request_id, FriendRequestAction::Accept).await
    }

    /// Reject a friend request. Returns `false` on failure.
    pub async fn reject_friend_request(&self, request_id: i64) -> bool {
        self.resolve_friend_request(request_id, FriendRequestAction::Reject).await
    }

    pub async fn try_accept_friend_request(&self, request_id: i64) -> Result<()> {
        self.try_resolve_friend_request(request_id, FriendRequestAction::Accept).await
    }

    pub async fn try_reject_friend_request(&self, request_id: i64) -> Result<()> {
        self.try_resolve_friend_request(request_id, FriendRequestAction::Reject).await
    }

    async fn resolve_friend_request(&self, request_id: i64, action: FriendRequestAction) -> bool {
        match self.try_resolve_friend_request(request_id, action).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(request_id, ?action, error = %e, "Error resolving friend request");
                false
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn try_resolve_friend_request(
        &self,
        request_id: i64,
        action: FriendRequestAction,
    ) -> Result<()> {
        let id = request_id.to_string();
        let url = self.endpoint(&["api", "friend-requests", &id, action.path_segment()])?;
        let response = self.send(self.post(url)).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::status(status.as_u16(), action.failure_message()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    fn client() -> UserServiceClient {
        UserServiceClient::new(ClientConfig::new("http://localhost:8000").unwrap()).unwrap()
    }

    #[test]
    fn test_friends_url_without_filter() {
        let url = client().friends_url("").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/friends/");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_friends_url_with_filter() {
        let url = client().friends_url("alice").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/friends/?username=alice");
    }

    #[test]
    fn test_friends_url_encodes_filter() {
        let url = client().friends_url("a&b").unwrap();
        assert_eq!(url.query(), Some("username=a%26b"));
    }

    #[test]
    fn test_request_action_paths_and_messages() {
        assert_eq!(FriendRequestAction::Accept.path_segment(), "accept");
        assert_eq!(FriendRequestAction::Reject.path_segment(), "reject");
        assert_eq!(FriendRequestAction::Accept.failure_message(), "Failed to accept friend request");
        assert_eq!(FriendRequestAction::Reject.failure_message(), "Failed to reject friend request");
    }
}
