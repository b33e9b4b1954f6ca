//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Client error type (`ClientError`, `Result<T>`)
//! - **[`service`]**: Service trait for dependency injection (`UserService`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use client::core::service::UserService;
//!
//! // In production: the HTTP client
//! let service: Arc<dyn UserService> = Arc::new(UserServiceClient::new(config)?);
//!
//! // In tests: a mock implementation
//! let service: Arc<dyn UserService> = Arc::new(MockUserService::default());
//! ```

pub mod error;
pub mod service;

pub use error::{ClientError, Result};
pub use service::UserService;
