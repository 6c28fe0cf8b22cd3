/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and validates the token from the
 * Authorization header and provides the caller's identity to handlers.
 *
 * # Header Format
 *
 * Both `Authorization: <token>` and `Authorization: Bearer <token>` are
 * accepted.
 *
 * # Rejections
 *
 * - No header, an empty one, or one that is not visible ASCII: 400 Bad Request
 * - Token fails validation: 401 Unauthorized
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::types::{BackendError, MSG_FAILED_TO_PROCESS, MSG_TOKEN_INVALID};

/// Authenticated caller extracted from a validated token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// `user_id` claim, the decimal user ID
    pub user_id: String,
    /// `iss` claim
    pub issuer: String,
}

/// Read the token from the Authorization header
///
/// Returns `None` when the header is absent, blank, or not valid visible ASCII.
fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
    let raw = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let token = match raw.strip_prefix("Bearer") {
        Some(rest) if rest.is_empty() || rest.starts_with(' ') => rest.trim_start(),
        _ => raw,
    };
    Some(token).filter(|t| !t.is_empty())
}

/// Authorization gate
///
/// This middleware:
/// 1. Extracts the token from the Authorization header
/// 2. Validates it with the token service
/// 3. Attaches the caller's identity to request extensions for use in handlers
pub async fn authorize_jwt(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = token_from_headers(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing Authorization header");
        BackendError::bad_request(MSG_FAILED_TO_PROCESS, "no token found")
    })?;

    let claims = tokens.validate_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        BackendError::unauthorized(MSG_TOKEN_INVALID, e.to_string())
    })?;

    tracing::info!(user_id = %claims.user_id, iss = %claims.iss, "Token validated");

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.user_id,
        issuer: claims.iss,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only meaningful behind `authorize_jwt`; elsewhere it rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl AuthUser {
    /// The caller's numeric user ID
    pub fn id(&self) -> Result<i64, BackendError> {
        self.0.user_id.parse().map_err(|_| {
            tracing::warn!("Non-numeric user_id in token: {}", self.0.user_id);
            BackendError::unauthorized(MSG_TOKEN_INVALID, "user_id claim is not a number")
        })
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::handler(StatusCode::UNAUTHORIZED, MSG_TOKEN_INVALID, "no token found")
            })?;

        Ok(AuthUser(user))
    }
}
