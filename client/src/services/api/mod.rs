//! # User Service API Client Module
//!
//! HTTP client for the user service backend: user lookup, the
//! friend-request workflow and profile settings.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs       - Module exports and documentation
//! ├── client.rs    - UserServiceClient struct and common functionality
//! ├── users.rs     - User lookup (GET /api/users/{username}/)
//! ├── friends.rs   - Friends list and friend requests
//! └── settings.rs  - General info and password updates
//! ```
//!
//! ## Failure Contracts
//!
//! | Operation | On failure |
//! |---|---|
//! | `get_user_by_username` | `Err` |
//! | `send_friend_request` | `false` |
//! | `get_friends` | `Err`, logged |
//! | `get_friend_requests` | `Err`, logged |
//! | `accept_friend_request` / `reject_friend_request` | `false`, logged |
//! | `update_general_info` | `Err`, logged |
//! | `update_password` | `false`, logged |
//!
//! Each boolean operation has a `try_*` sibling returning `Result<()>`.

pub mod client;
pub mod friends;
pub mod settings;
pub mod users;

pub use client::UserServiceClient;
