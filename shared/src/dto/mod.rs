//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the user service REST API.
//!
//! ## Module Organization
//!
//! - [`user`] - User lookup
//! - [`friends`] - Friends list, friend requests and their status
//! - [`settings`] - General info and password updates
//! - [`error`] - Error body (`{"error": "..."}`)
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/settings/general/
//! Content-Type: application/json
//! X-CSRFToken: 3bX...
//!
//! {
//!   "name": "Bob",
//!   "email": "b@x.com"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "user": {
//!     "name": "Bob",
//!     "email": "b@x.com"
//!   }
//! }
//! ```

pub mod error;
pub mod friends;
pub mod settings;
pub mod user;

pub use error::*;
pub use friends::*;
pub use settings::*;
pub use user::*;
