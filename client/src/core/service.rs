//! # Service Traits
//!
//! Traits for dependency injection, so callers can swap the HTTP client for a
//! mock in tests.

use async_trait::async_trait;
use shared::{Friend, FriendRequest, UpdateUserInfoDto, User};

use super::error::Result;

/// User service operations.
///
/// The failure contract differs per operation: lookups, reads and the general
/// info update return `Err`, while the friend-request actions and the password
/// update report failure as `false`.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Look up a user by username
    async fn get_user_by_username(&self, username: &str) -> Result<User>;

    /// Send a friend request to another user
    async fn send_friend_request(&self, receiver_id: i64) -> bool;

    /// Get friends, optionally filtered by username (empty = no filter)
    async fn get_friends(&self, username: &str) -> Result<Vec<Friend>>;

    /// Get pending friend requests for the session user
    async fn get_friend_requests(&self) -> Result<Vec<FriendRequest>>;

    /// Accept a friend request
    async fn accept_friend_request(&self, request_id: i64) -> bool;

    /// Reject a friend request
    async fn reject_friend_request(&self, request_id: i64) -> bool;

    /// Update name and email
    async fn update_general_info(&self, name: &str, email: &str) -> Result<UpdateUserInfoDto>;

    /// Update password (new password and confirmation)
    async fn update_password(&self, password1: &str, password2: &str) -> bool;
}
