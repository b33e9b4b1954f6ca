//! # Logging Infrastructure
//!
//! Structured logging via `tracing`. Operations log failures with structured
//! fields; the binary installs the subscriber once at startup.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use client::debug::{init_logger, LogConfig};
//!
//! let _guard = init_logger(&LogConfig::from_env());
//! tracing::info!(endpoint = "/api/friends/", "Fetching friends");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `client=debug,info`)
//! - `CLIENT_LOG_DIR`: Also write daily-rotated logs to this directory
//! - `NO_COLOR`: Disable ANSI colours on stderr

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init as init_logger;
