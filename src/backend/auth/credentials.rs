/**
 * Credential Check
 *
 * Looks a user up by e-mail and verifies the presented password against the
 * stored bcrypt hash. The outcome is a tagged value so callers never have to
 * guess what kind of result they got back.
 */

use bcrypt::verify;
use sqlx::SqlitePool;

use crate::backend::auth::users::{get_user_by_email, User};
use crate::backend::error::BackendError;

/// Result of checking an e-mail / password pair
#[derive(Debug, Clone)]
pub enum CredentialCheck {
    /// The e-mail exists and the password matches
    Found(User),
    /// No user is registered under this e-mail
    NotFound,
    /// The user exists but the password does not match
    Invalid,
}

impl CredentialCheck {
    /// The verified user, if any
    pub fn into_user(self) -> Option<User> {
        match self {
            Self::Found(user) => Some(user),
            Self::NotFound | Self::Invalid => None,
        }
    }
}

/// Verify a user's credentials
///
/// # Errors
///
/// Database failures and unreadable stored hashes are errors; a wrong
/// password or unknown e-mail is not.
pub async fn verify_credential(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<CredentialCheck, BackendError> {
    let Some(user) = get_user_by_email(pool, email).await.map_err(|e| {
        tracing::error!("Database error during credential check: {:?}", e);
        BackendError::from(e)
    })?
    else {
        tracing::warn!("User not found: {}", email);
        return Ok(CredentialCheck::NotFound);
    };

    let valid = verify(password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        BackendError::from(e)
    })?;

    if !valid || user.email != email {
        tracing::warn!("Invalid password for user: {}", email);
        return Ok(CredentialCheck::Invalid);
    }

    Ok(CredentialCheck::Found(user))
}
