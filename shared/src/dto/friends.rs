//! # Friends Data Transfer Objects
//!
//! Defines request and response structures for the friends list and the
//! friend-request workflow.

use serde::{Deserialize, Serialize};

use super::user::UserSummary;

/// Friend request to send to another user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendFriendRequestRequest {
    pub receiver_id: i64,
}

/// Friend information (a confirmed relationship)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Friend {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Server-owned state of a friend request.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FriendRequestStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

/// Friend request information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FriendRequest {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<UserSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<UserSummary>,
    #[serde(default)]
    pub status: FriendRequestStatus,
}

/// `GET /api/friends/` envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendsResponse {
    pub friends: Vec<Friend>,
}

/// `GET /api/friend-requests/` envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendRequestsResponse {
    pub requests: Vec<FriendRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_friend_request_status_defaults_to_pending() {
        let request: FriendRequest = serde_json::from_value(json!({
            "id": 7,
            "sender": {"id": 1, "username": "alice"}
        }))
        .unwrap();

        assert_eq!(request.status, FriendRequestStatus::Pending);
        assert_eq!(request.sender.unwrap().username, "alice");
        assert!(request.receiver.is_none());
    }

    #[test]
    fn test_friend_request_status_is_lowercase_on_wire() {
        assert_eq!(
            serde_json::to_value(FriendRequestStatus::Accepted).unwrap(),
            json!("accepted")
        );
        let status: FriendRequestStatus = serde_json::from_value(json!("rejected")).unwrap();
        assert_eq!(status, FriendRequestStatus::Rejected);
    }

    #[test]
    fn test_send_request_body_shape() {
        let body = serde_json::to_value(SendFriendRequestRequest { receiver_id: 42 }).unwrap();
        assert_eq!(body, json!({"receiver_id": 42}));
    }
}
