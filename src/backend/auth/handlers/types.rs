/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication and profile handlers.
 *
 * Request fields default to empty strings so that an absent field reaches
 * validation and is reported by name instead of failing deserialization.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;
use crate::backend::books::Book;
use crate::shared::error::{is_valid_email, require, SharedError};

/// Register request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("password", &self.password)?;
        validate_email(&self.email)
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be verified against stored hash)
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require("email", &self.email)?;
        require("password", &self.password)
    }
}

/// Profile update request
///
/// An absent or empty `password` keeps the current one.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct UserUpdateRequest {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
}

impl UserUpdateRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        validate_email(&self.email)
    }

    /// The new password, if one was supplied
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

fn validate_email(email: &str) -> Result<(), SharedError> {
    if !is_valid_email(email) {
        return Err(SharedError::validation("email", "must be a valid e-mail address"));
    }
    Ok(())
}

/// Auth response
///
/// Returned by register and login: the user's public fields with the token
/// alongside them.
#[derive(Serialize, Debug)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub user: User,
    /// Token for the Authorization header
    pub token: String,
}

/// Profile response: the user and every book they own
#[derive(Serialize, Debug)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub user: User,
    pub books: Vec<Book>,
}
