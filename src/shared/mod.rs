//! Shared Module
//!
//! This module contains types that do not depend on the HTTP server:
//! input validation errors and application configuration. The backend
//! builds on top of them.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
