//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Database and application fixtures
//! - Authentication test helpers
//! - Envelope assertion macros

pub mod auth_helpers;
pub mod database;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use database::*;
