/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Generate a token
 * 4. Return token and user info
 *
 * # Security
 *
 * - Unknown e-mail and wrong password produce the same 401 response
 * - Tokens are valid for one year
 * - User passwords are never returned in responses
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::backend::auth::credentials::verify_credential;
use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;
use crate::backend::response::{build_response, ApiResponse};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - If the body does not parse or a field is blank
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `500 Internal Server Error` - If database query or token generation fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "status": true,
///   "message": "OK!",
///   "errors": null,
///   "data": {
///     "id": 1,
///     "name": "Reader",
///     "email": "user@example.com",
///     "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
///   }
/// }
/// ```
pub async fn login(
    State(pool): State<SqlitePool>,
    State(tokens): State<Arc<TokenService>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiResponse<AuthResponse>, BackendError> {
    let Json(request) = payload?;
    request.validate()?;

    tracing::info!("Login request for: {}", request.email);

    let user = verify_credential(&pool, &request.email, &request.password)
        .await?
        .into_user()
        .ok_or_else(BackendError::bad_credentials)?;

    let token = tokens.generate_token(&user.id.to_string())?;

    tracing::info!("User logged in successfully: {} ({})", user.name, user.email);

    Ok(build_response("OK!", AuthResponse { user, token }))
}
