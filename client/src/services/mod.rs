//! # Services Module
//!
//! Backend integrations for the user service client.
//!
//! ```text
//! services/
//! ├── api/      - UserServiceClient (users, friends, settings)
//! └── csrf.rs   - CSRF token providers
//! ```
//!
//! ## Request Flow
//!
//! ```text
//! caller ──> UserServiceClient ──> reqwest::Client (cookie jar) ──> backend
//!                  │
//!                  └── CredentialProvider::csrf_token() ──> X-CSRFToken (POST only)
//! ```
//!
//! ## Thread Safety
//!
//! `UserServiceClient` holds immutable configuration, a pooled
//! `reqwest::Client` and an internally synchronised cookie jar. Wrap it in
//! `Arc` and call it from any number of tasks.

pub mod api;
pub mod csrf;
