//! Shared Error Types
//!
//! This module defines error types that describe bad input independently of
//! the HTTP layer. Request payload checks in the backend produce these and
//! the backend error type wraps them.
//!
//! # Error Categories
//!
//! - `MissingField` - A required field is absent or blank
//! - `ValidationError` - A field is present but its value is not acceptable
//!
//! # Usage
//!
//! ```rust
//! use bookshelf::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "must be a valid e-mail address");
//! assert!(error.to_string().contains("email"));
//! ```
use thiserror::Error;

/// Input errors that do not depend on the transport
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A required field was not provided
    #[error("field '{field}' is required")]
    MissingField {
        /// Name of the missing field as it appears on the wire
        field: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new missing-field error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Fail with [`SharedError::MissingField`] when `value` is empty or only whitespace.
pub fn require(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::missing(field));
    }
    Ok(())
}

/// Basic e-mail shape check: one `@` with a non-empty local part and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}
