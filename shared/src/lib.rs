//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the user service client and
//! the backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::user`]**: User lookup records
//!   - **[`dto::friends`]**: Friends list and friend-request workflow
//!   - **[`dto::settings`]**: Profile settings updates
//!   - **[`dto::error`]**: Error body returned on failed requests
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** in Rust and in JSON
//! - Response records tolerate fields they do not know about
//! - All structs implement both `Serialize` and `Deserialize`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::settings::{UpdateGeneralInfoRequest, UpdateGeneralInfoResponse};
//!
//! # async fn run() -> Result<(), reqwest::Error> {
//! let request = UpdateGeneralInfoRequest {
//!     name: "Bob".to_string(),
//!     email: "b@x.com".to_string(),
//! };
//!
//! let response: UpdateGeneralInfoResponse = reqwest::Client::new()
//!     .post("http://localhost:8000/api/settings/general/")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//!
//! println!("{}", response.user.email);
//! # Ok(())
//! # }
//! ```

pub mod dto;

// Wildcard re-export: shared is a DTO library and every type is public API
pub use dto::*;
