//! # User Service Client - Library Root
//!
//! Async bindings for the social user service REST API: user lookup, the
//! friend-request workflow and profile settings updates.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              client (this crate)                       │
//! ├────────────────────────────────────────────────────────┤
//! │  UserServiceClient  - typed operations                 │
//! │  CredentialProvider - CSRF token source                │
//! │  Reqwest            - HTTP client + cookie jar         │
//! │  Tokio              - Async runtime                    │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP/JSON (credentialed, X-CSRFToken on POST)
//!          ▼
//! ┌─────────────────────────┐
//! │  User service backend   │
//! │  /api/users/*           │
//! │  /api/friends/          │
//! │  /api/friend-request*/  │
//! │  /api/settings/*        │
//! └─────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - **config**: `ClientConfig` (backend origin, timeout, seeded cookies)
//! - **core**: `ClientError`, `Result<T>`, the `UserService` trait
//! - **services**: `UserServiceClient` and the CSRF credential providers
//! - **debug**: logging configuration and subscriber setup
//!
//! ## Usage
//!
//! ```rust,no_run
//! use client::{ClientConfig, UserServiceClient};
//!
//! # async fn run() -> client::Result<()> {
//! let api = UserServiceClient::new(ClientConfig::from_env()?)?;
//!
//! let alice = api.get_user_by_username("alice").await?;
//! if api.send_friend_request(alice.id().unwrap_or_default()).await {
//!     println!("request sent to {}", alice.username);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod debug;
pub mod services;

pub use config::ClientConfig;
pub use crate::core::{ClientError, Result, UserService};
pub use services::api::UserServiceClient;
pub use services::csrf::{CookieJarCredentials, CredentialProvider, StaticCredentials};
