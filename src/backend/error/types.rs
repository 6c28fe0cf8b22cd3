/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Handler errors carry an explicit status, a short envelope message and a
 * longer detail string:
 * - Unbindable request ids
 * - Bad credentials
 * - Missing or foreign resources
 *
 * ## Token Errors
 *
 * Token errors come from the token service. Validation failures map to
 * 401, a signing failure maps to 500.
 *
 * ## Input Errors
 *
 * Request bodies that fail to parse or fail field validation map to 400.
 *
 * ## Infrastructure Errors
 *
 * Database and password hashing failures map to 500 and never leak their
 * internals into the response.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::TokenError;
use crate::shared::SharedError;

/// Envelope message for unparseable or invalid request bodies
pub const MSG_FAILED_TO_PROCESS: &str = "Failed to process request";
/// Envelope message for rejected tokens
pub const MSG_TOKEN_INVALID: &str = "Token is not valid";
/// Envelope message for server-side failures
pub const MSG_INTERNAL: &str = "Internal server error";
/// Envelope message for missing records
pub const MSG_NOT_FOUND: &str = "Data not found";
/// Envelope message for ownership failures
pub const MSG_FORBIDDEN: &str = "You dont have permission";
/// Envelope message for a non-numeric id path segment
pub const MSG_BAD_ID: &str = "No param id was found";
/// Envelope message for failed logins
pub const MSG_BAD_CREDENTIALS: &str = "Please check again your credential";

/// Backend-specific error types
///
/// This enum represents all possible errors that can occur in the backend.
/// Each variant can be converted to an HTTP response carrying the JSON
/// envelope.
///
/// # Usage
///
/// ```rust
/// use bookshelf::backend::error::BackendError;
///
/// let err = BackendError::not_found("No Data with given id");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status
    #[error("{message}: {detail}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Short envelope message
        message: String,
        /// Longer explanation placed in the envelope's `errors`
        detail: String,
    },

    /// Token issuance or validation failure
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Field validation error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Request body could not be deserialized
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification error
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(
        status: StatusCode,
        message: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// 400 with an arbitrary envelope message
    pub fn bad_request(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message, detail)
    }

    /// 401 for a rejected login
    pub fn bad_credentials() -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, MSG_BAD_CREDENTIALS, "Invalid Credential")
    }

    /// 401 with an arbitrary envelope message
    pub fn unauthorized(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message, detail)
    }

    /// 403 for an ownership failure
    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::handler(StatusCode::FORBIDDEN, MSG_FORBIDDEN, detail)
    }

    /// 404 for a missing record
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, MSG_NOT_FOUND, detail)
    }

    /// 409 for a duplicate unique value
    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::handler(StatusCode::CONFLICT, MSG_FAILED_TO_PROCESS, detail)
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Token` - 401, except signing failures which are 500
    /// - `SharedError` / `JsonRejection` - 400 Bad Request
    /// - `Database` / `PasswordHash` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Token(TokenError::Signing(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Token(_) => StatusCode::UNAUTHORIZED,
            Self::SharedError(_) | Self::JsonRejection(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the short envelope message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Token(TokenError::Signing(_)) => MSG_INTERNAL.to_string(),
            Self::Token(_) => MSG_TOKEN_INVALID.to_string(),
            Self::SharedError(_) | Self::JsonRejection(_) => MSG_FAILED_TO_PROCESS.to_string(),
            Self::Database(_) | Self::PasswordHash(_) => MSG_INTERNAL.to_string(),
        }
    }

    /// Get the detail text for the envelope's `errors` list
    pub fn detail(&self) -> String {
        match self {
            Self::HandlerError { detail, .. } => detail.clone(),
            Self::Token(TokenError::Signing(_)) => "failed to sign token".to_string(),
            Self::Token(err) => err.to_string(),
            Self::SharedError(err) => err.to_string(),
            Self::JsonRejection(rejection) => rejection.body_text(),
            Self::Database(_) => "database operation failed".to_string(),
            Self::PasswordHash(_) => "password hashing failed".to_string(),
        }
    }
}
